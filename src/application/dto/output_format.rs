/// Output format enumeration for rendered diagrams
///
/// This enum belongs in the application layer as both the CLI (inbound
/// adapter) and the renderers (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Scalable vector graphics with clickable nodes (default)
    Svg,
    /// Raster image; nodes are not clickable
    Png,
    /// The graph description itself, no layout engine needed
    Dot,
}

impl OutputFormat {
    /// Value for the layout engine's `-T` flag
    pub fn graphviz_format(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Dot => "dot",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Png => "image/png",
            OutputFormat::Dot => "text/plain; charset=utf-8",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "dot" | "gv" => Ok(OutputFormat::Dot),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'svg', 'png' or 'dot'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.graphviz_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("svg").unwrap(), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_str("png").unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_str("dot").unwrap(), OutputFormat::Dot);
        assert_eq!(OutputFormat::from_str("gv").unwrap(), OutputFormat::Dot);
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("SVG").unwrap(), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_str("Png").unwrap(), OutputFormat::Png);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("pdf").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("pdf"));
        assert!(error.contains("svg"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Svg.to_string(), "svg");
        assert_eq!(OutputFormat::Png.to_string(), "png");
        assert_eq!(OutputFormat::Dot.to_string(), "dot");
    }

    #[test]
    fn test_content_types() {
        assert_eq!(OutputFormat::Svg.content_type(), "image/svg+xml");
        assert_eq!(OutputFormat::Png.content_type(), "image/png");
        assert!(OutputFormat::Dot.content_type().starts_with("text/plain"));
    }
}
