//! Configuration file support for depgraph-nav.
//!
//! Provides YAML-based configuration through `depgraph-nav.config.yml` files,
//! and the merge of command-line overrides, file values and built-in defaults
//! into the settings the navigator runs with.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{EdgeSourceSpec, OutputFormat};
use crate::graph_navigation::services::ProjectionOptions;
use crate::shared::error::NavigatorError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depgraph-nav.config.yml";

/// Layout-engine program used when neither the CLI nor the file names one
pub const DEFAULT_RENDERER: &str = "dot";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Program and arguments producing the edge list
    pub command: Option<Vec<String>>,
    /// Edge-list file, `-` for stdin; takes precedence over `command`
    pub input: Option<String>,
    pub renderer: Option<String>,
    pub format: Option<String>,
    pub port: Option<u16>,
    pub open_browser: Option<bool>,
    pub legend: Option<bool>,
    pub fan_out: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| NavigatorError::ConfigError {
        path: path.to_path_buf(),
        details: format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            e
        ),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| NavigatorError::ConfigError {
            path: path.to_path_buf(),
            details: format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                e
            ),
        })?;

    validate_config(&config).map_err(|details| NavigatorError::ConfigError {
        path: path.to_path_buf(),
        details,
    })?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> std::result::Result<(), String> {
    if let Some(ref command) = config.command {
        match command.first() {
            None => return Err("'command' must not be empty.\n\n💡 Hint: List the program first, e.g. [\"go\", \"mod\", \"graph\"].".to_string()),
            Some(program) if program.trim().is_empty() => {
                return Err("'command' must start with a non-blank program name.".to_string())
            }
            Some(_) => {}
        }
    }

    if let Some(ref renderer) = config.renderer {
        if renderer.trim().is_empty() {
            return Err("'renderer' must not be blank.".to_string());
        }
    }

    if let Some(ref format) = config.format {
        format.parse::<OutputFormat>()?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line; `None`/`false` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input: Option<String>,
    pub command: Option<Vec<String>>,
    pub renderer: Option<String>,
    pub format: Option<OutputFormat>,
    pub port: Option<u16>,
    pub no_browser: bool,
    pub legend: bool,
    pub no_fan_out: bool,
}

/// Effective settings after merging CLI > config file > defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: EdgeSourceSpec,
    pub renderer: String,
    pub format: OutputFormat,
    pub port: u16,
    pub open_browser: bool,
    pub projection: ProjectionOptions,
}

impl Settings {
    /// Merges command-line overrides with an optional config file
    ///
    /// # Errors
    /// Returns an error if the resulting command or renderer is unusable
    pub fn resolve(overrides: CliOverrides, file: Option<ConfigFile>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let source = if let Some(input) = overrides.input {
            EdgeSourceSpec::from_input(&input)
        } else if let Some(command) = overrides.command {
            EdgeSourceSpec::Command(command)
        } else if let Some(input) = file.input {
            EdgeSourceSpec::from_input(&input)
        } else if let Some(command) = file.command {
            EdgeSourceSpec::Command(command)
        } else {
            EdgeSourceSpec::default_command()
        };

        if let EdgeSourceSpec::Command(ref command) = source {
            if command.first().map_or(true, |program| program.trim().is_empty()) {
                anyhow::bail!("The edge-list command must start with a non-blank program name");
            }
        }

        let renderer = overrides
            .renderer
            .or(file.renderer)
            .unwrap_or_else(|| DEFAULT_RENDERER.to_string());
        if renderer.trim().is_empty() {
            anyhow::bail!("The renderer program must not be blank");
        }

        let format = match (overrides.format, file.format) {
            (Some(format), _) => format,
            (None, Some(format)) => format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::Svg,
        };

        let defaults = ProjectionOptions::default();
        let projection = ProjectionOptions {
            show_fan_out: if overrides.no_fan_out {
                false
            } else {
                file.fan_out.unwrap_or(defaults.show_fan_out)
            },
            show_legend: overrides.legend || file.legend.unwrap_or(defaults.show_legend),
        };

        Ok(Self {
            source,
            renderer,
            format,
            port: overrides.port.or(file.port).unwrap_or(0),
            open_browser: !overrides.no_browser && file.open_browser.unwrap_or(true),
            projection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
command: ["cat", "graph.txt"]
renderer: /usr/local/bin/dot
format: PNG
port: 8080
open_browser: false
legend: true
fan_out: false
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.command,
            Some(vec!["cat".to_string(), "graph.txt".to_string()])
        );
        assert_eq!(config.renderer.as_deref(), Some("/usr/local/bin/dot"));
        assert_eq!(config.format.as_deref(), Some("PNG"));
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.open_browser, Some(false));
        assert_eq!(config.legend, Some(true));
        assert_eq!(config.fan_out, Some(false));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "input: deps.txt\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.input.as_deref(), Some("deps.txt"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        let err = format!("{}", err);
        assert!(err.contains("Invalid configuration"));
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_command_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "command: []\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("'command' must not be empty"));
    }

    #[test]
    fn test_blank_program_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "command: [\"  \", \"mod\"]\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("non-blank program"));
    }

    #[test]
    fn test_blank_renderer_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "renderer: \"\"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("'renderer' must not be blank"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: pdf\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format: pdf"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: svg
unknown_field: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_defaults_without_cli_or_file() {
        let settings = Settings::resolve(CliOverrides::default(), None).unwrap();

        assert_eq!(settings.source, EdgeSourceSpec::default_command());
        assert_eq!(settings.renderer, DEFAULT_RENDERER);
        assert_eq!(settings.format, OutputFormat::Svg);
        assert_eq!(settings.port, 0);
        assert!(settings.open_browser);
        assert_eq!(settings.projection, ProjectionOptions::default());
    }

    #[test]
    fn test_file_values_apply() {
        let file = ConfigFile {
            command: Some(vec!["cat".to_string(), "deps.txt".to_string()]),
            renderer: Some("neato".to_string()),
            format: Some("dot".to_string()),
            port: Some(9000),
            open_browser: Some(false),
            legend: Some(true),
            fan_out: Some(false),
            ..Default::default()
        };

        let settings = Settings::resolve(CliOverrides::default(), Some(file)).unwrap();

        assert_eq!(
            settings.source,
            EdgeSourceSpec::Command(vec!["cat".to_string(), "deps.txt".to_string()])
        );
        assert_eq!(settings.renderer, "neato");
        assert_eq!(settings.format, OutputFormat::Dot);
        assert_eq!(settings.port, 9000);
        assert!(!settings.open_browser);
        assert!(settings.projection.show_legend);
        assert!(!settings.projection.show_fan_out);
    }

    #[test]
    fn test_file_input_beats_file_command() {
        let file = ConfigFile {
            command: Some(vec!["go".to_string()]),
            input: Some("-".to_string()),
            ..Default::default()
        };

        let settings = Settings::resolve(CliOverrides::default(), Some(file)).unwrap();
        assert_eq!(settings.source, EdgeSourceSpec::Stdin);
    }

    #[test]
    fn test_cli_beats_file() {
        let file = ConfigFile {
            input: Some("from-file.txt".to_string()),
            renderer: Some("neato".to_string()),
            format: Some("png".to_string()),
            port: Some(9000),
            open_browser: Some(true),
            fan_out: Some(true),
            ..Default::default()
        };
        let overrides = CliOverrides {
            command: Some(vec!["cat".to_string(), "cli.txt".to_string()]),
            renderer: Some("dot".to_string()),
            format: Some(OutputFormat::Svg),
            port: Some(8123),
            no_browser: true,
            no_fan_out: true,
            ..Default::default()
        };

        let settings = Settings::resolve(overrides, Some(file)).unwrap();

        assert_eq!(
            settings.source,
            EdgeSourceSpec::Command(vec!["cat".to_string(), "cli.txt".to_string()])
        );
        assert_eq!(settings.renderer, "dot");
        assert_eq!(settings.format, OutputFormat::Svg);
        assert_eq!(settings.port, 8123);
        assert!(!settings.open_browser);
        assert!(!settings.projection.show_fan_out);
    }

    #[test]
    fn test_cli_input_beats_cli_command() {
        let overrides = CliOverrides {
            input: Some("graph.txt".to_string()),
            command: Some(vec!["go".to_string(), "mod".to_string(), "graph".to_string()]),
            ..Default::default()
        };

        let settings = Settings::resolve(overrides, None).unwrap();
        assert_eq!(settings.source, EdgeSourceSpec::File(PathBuf::from("graph.txt")));
    }

    #[test]
    fn test_blank_cli_renderer_rejected() {
        let overrides = CliOverrides {
            renderer: Some(" ".to_string()),
            ..Default::default()
        };

        let err = Settings::resolve(overrides, None).unwrap_err();
        assert!(err.to_string().contains("renderer program must not be blank"));
    }

    #[test]
    fn test_blank_cli_command_rejected() {
        let overrides = CliOverrides {
            command: Some(vec!["".to_string()]),
            ..Default::default()
        };

        assert!(Settings::resolve(overrides, None).is_err());
    }
}
