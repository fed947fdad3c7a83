use crate::shared::error::NavigatorError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum edge-list file size (100 MB)
/// A `go mod graph` dump of a large monorepo stays well below this.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an input path is a readable regular file within the size limit.
///
/// # Security
/// Uses `symlink_metadata()` so a symbolic link is rejected instead of followed.
///
/// # Returns
/// The file size in bytes
///
/// # Errors
/// Returns `NavigatorError::InvalidInputPath` if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<u64> {
    let invalid = |reason: String| NavigatorError::InvalidInputPath {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read file metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Input path is a symbolic link. For security reasons, symbolic links are not allowed."
                .to_string(),
        )
        .into());
    }

    if !metadata.is_file() {
        return Err(invalid("Not a regular file".to_string()).into());
    }

    let file_size = metadata.len();
    if file_size > max_size {
        return Err(invalid(format!(
            "Security: File is too large ({} bytes). Maximum allowed size is {} bytes.",
            file_size, max_size
        ))
        .into());
    }

    Ok(file_size)
}
