//! Render configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for the indented text rendering.
///
/// The defaults print one name per line, indented by one tab per level.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RenderConfig {
    /// String repeated once per path element before each name.
    #[builder(default = "default_indent()")]
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Deepest path length to print (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Append `/` to drives and directories.
    #[builder(default = "false")]
    #[serde(default)]
    pub mark_containers: bool,

    /// Append each entry's index path.
    #[builder(default = "false")]
    #[serde(default)]
    pub show_paths: bool,
}

fn default_indent() -> String {
    "\t".to_string()
}

impl RenderConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self
            .indent
            .as_ref()
            .is_some_and(|indent| indent.contains(['\n', '\r']))
        {
            return Err("Indent cannot contain line breaks".to_string());
        }
        Ok(())
    }
}

impl RenderConfig {
    /// Create a new render config builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Check if an entry at `depth` should be printed.
    pub fn includes_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            max_depth: None,
            mark_containers: false,
            show_paths: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = RenderConfig::builder()
            .indent("  ")
            .max_depth(2usize)
            .mark_containers(true)
            .build()
            .unwrap();

        assert_eq!(config.indent, "  ");
        assert_eq!(config.max_depth, Some(2));
        assert!(config.mark_containers);
        assert!(!config.show_paths);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let built = RenderConfig::builder().build().unwrap();
        assert_eq!(built, RenderConfig::default());
        assert_eq!(built.indent, "\t");
    }

    #[test]
    fn test_builder_rejects_line_breaks() {
        let result = RenderConfig::builder().indent("\n").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_includes_depth() {
        let mut config = RenderConfig::default();
        assert!(config.includes_depth(100));

        config.max_depth = Some(1);
        assert!(config.includes_depth(1));
        assert!(!config.includes_depth(2));
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"show_paths": true}"#).unwrap();
        assert_eq!(config.indent, "\t");
        assert!(config.show_paths);
    }
}
