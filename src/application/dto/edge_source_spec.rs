use std::fmt;
use std::path::PathBuf;

/// Where the raw edge list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeSourceSpec {
    /// Run a command and read its standard output; program first, then arguments
    Command(Vec<String>),
    /// Read an edge-list file
    File(PathBuf),
    /// Read standard input
    Stdin,
}

impl EdgeSourceSpec {
    /// `go mod graph`, the dump this navigator was built around
    pub fn default_command() -> Self {
        EdgeSourceSpec::Command(vec!["go".to_string(), "mod".to_string(), "graph".to_string()])
    }

    /// Interprets an `--input` value: `-` is stdin, anything else a file path
    pub fn from_input(input: &str) -> Self {
        if input == "-" {
            EdgeSourceSpec::Stdin
        } else {
            EdgeSourceSpec::File(PathBuf::from(input))
        }
    }
}

impl Default for EdgeSourceSpec {
    fn default() -> Self {
        Self::default_command()
    }
}

impl fmt::Display for EdgeSourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeSourceSpec::Command(command) => write!(f, "`{}`", command.join(" ")),
            EdgeSourceSpec::File(path) => write!(f, "{}", path.display()),
            EdgeSourceSpec::Stdin => write!(f, "stdin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        assert_eq!(EdgeSourceSpec::from_input("-"), EdgeSourceSpec::Stdin);
        assert_eq!(
            EdgeSourceSpec::from_input("graph.txt"),
            EdgeSourceSpec::File(PathBuf::from("graph.txt"))
        );
    }

    #[test]
    fn test_default_is_go_mod_graph() {
        assert_eq!(EdgeSourceSpec::default().to_string(), "`go mod graph`");
    }
}
