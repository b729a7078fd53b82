use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    DEFAULT_DENYLIST, DEFAULT_DOMAIN_MARKER, DEFAULT_DOMAIN_SUFFIX, DEFAULT_MESSAGE_ID_MARKER,
};

/// Top-level configuration for Mailscrub.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scrub: ScrubConfig,
}

/// Header rewriting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrubConfig {
    /// Header names whose lines are dropped, replaces the built-in list.
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,

    /// Header names dropped in addition to `denylist`.
    #[serde(default)]
    pub extra_denylist: Vec<String>,

    /// Top-level domain suffix rewritten in the `From` header.
    #[serde(default = "default_domain_suffix")]
    pub domain_suffix: String,

    /// Marker replacing the domain suffix.
    #[serde(default = "default_domain_marker")]
    pub domain_marker: String,

    /// Marker injected into the `Message-ID` header.
    #[serde(default = "default_message_id_marker")]
    pub message_id_marker: String,
}

impl ScrubConfig {
    /// Returns the complete list of dropped header names, the base
    /// denylist followed by the extra entries.
    pub fn denied_headers(&self) -> impl Iterator<Item = &str> {
        self.denylist
            .iter()
            .chain(self.extra_denylist.iter())
            .map(String::as_str)
    }
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            denylist: default_denylist(),
            extra_denylist: Vec::new(),
            domain_suffix: default_domain_suffix(),
            domain_marker: default_domain_marker(),
            message_id_marker: default_message_id_marker(),
        }
    }
}

/// Loads configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Errors that can occur while loading configuration or building
/// a processor from it.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading the file.
    Io(std::io::Error),
    /// A parse error occurred deserializing TOML.
    Parse(toml::de::Error),
    /// The domain rewrite pattern failed to compile.
    Pattern(regex::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Config parse error: {e}"),
            ConfigError::Pattern(e) => write!(f, "Config pattern error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Pattern(e) => Some(e),
        }
    }
}

fn default_denylist() -> Vec<String> {
    DEFAULT_DENYLIST.iter().map(|name| name.to_string()).collect()
}

fn default_domain_suffix() -> String {
    DEFAULT_DOMAIN_SUFFIX.to_string()
}

fn default_domain_marker() -> String {
    DEFAULT_DOMAIN_MARKER.to_string()
}

fn default_message_id_marker() -> String {
    DEFAULT_MESSAGE_ID_MARKER.to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_defaults() {
        let toml = r#"
[scrub]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.scrub, ScrubConfig::default());
        assert_eq!(config.scrub.denylist.len(), 9);
        assert_eq!(config.scrub.domain_suffix, "fin");
        assert_eq!(config.scrub.domain_marker, "[RDNS]");
        assert_eq!(config.scrub.message_id_marker, "[EID]");
    }

    #[test]
    fn test_parse_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scrub, ScrubConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[scrub]
denylist = ["received"]
extra_denylist = ["x-mailer", "x-originating-ip"]
domain_suffix = "corp"
domain_marker = "[DOMAIN]"
message_id_marker = "[ID]"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.scrub.denylist, ["received"]);
        assert_eq!(
            config.scrub.denied_headers().collect::<Vec<_>>(),
            ["received", "x-mailer", "x-originating-ip"]
        );
        assert_eq!(config.scrub.domain_suffix, "corp");
        assert_eq!(config.scrub.domain_marker, "[DOMAIN]");
        assert_eq!(config.scrub.message_id_marker, "[ID]");
    }

    #[test]
    fn test_extra_denylist_keeps_defaults() {
        let toml = r#"
[scrub]
extra_denylist = ["x-mailer"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let denied: Vec<_> = config.scrub.denied_headers().collect();
        assert_eq!(denied.len(), 10);
        assert_eq!(denied[0], "received");
        assert_eq!(denied[9], "x-mailer");
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scrub]\nmessage_id_marker = \"<ID>\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.scrub.message_id_marker, "<ID>");
        assert_eq!(config.scrub.domain_suffix, "fin");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/mailscrub.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scrub\ndenylist = 1").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("Config parse error:"));
    }
}
