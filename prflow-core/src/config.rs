//! Configuration management for prflow
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (PRFLOW_*)
//! 3. Config file (~/.config/prflow/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default cut-off for PR titles, in characters
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 50;

/// Branch names treated as integration targets
pub const DEFAULT_PRIMARY_BRANCH_NAMES: [&str; 3] = ["main", "master", "develop"];

/// GitHub API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the REST API (override for GitHub Enterprise)
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Settings that shape the rendered graph and the console summary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Titles longer than this are truncated
    pub max_title_length: usize,

    /// Path segments that mark a branch as primary, compared lower-cased
    pub primary_branch_names: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            primary_branch_names: DEFAULT_PRIMARY_BRANCH_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl GraphConfig {
    /// Cut `title` to at most `max_title_length` characters
    ///
    /// Applying this twice yields the same result as applying it once.
    pub fn truncate_title<'a>(&self, title: &'a str) -> &'a str {
        match title.char_indices().nth(self.max_title_length) {
            Some((idx, _)) => &title[..idx],
            None => title,
        }
    }

    /// Whether any `/`-separated segment of `branch` is a primary name
    ///
    /// `release/main` matches, `feature/main-redesign` does not.
    pub fn has_primary_segment(&self, branch: &str) -> bool {
        branch.split('/').any(|part| {
            let part = part.to_lowercase();
            self.primary_branch_names
                .iter()
                .any(|name| name.to_lowercase() == part)
        })
    }
}

/// Where generated files go
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory holding `dot/`, `png/` and `svg/`; empty means the working directory
    pub dir: PathBuf,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub graph: GraphConfig,
    pub output: OutputConfig,
}

/// CLI values that take precedence over every other source
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub max_title_length: Option<usize>,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/prflow/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prflow").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - PRFLOW_API_URL: REST API base URL
    /// - PRFLOW_OUTPUT_DIR: Root directory for generated files
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(api_url) = std::env::var("PRFLOW_API_URL") {
            self.github.api_url = api_url;
        }

        if let Ok(dir) = std::env::var("PRFLOW_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, overrides: CliOverrides) -> Self {
        if let Some(api_url) = overrides.api_url {
            self.github.api_url = api_url;
        }

        if let Some(dir) = overrides.output_dir {
            self.output.dir = dir;
        }

        if let Some(len) = overrides.max_title_length {
            self.graph.max_title_length = len;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(overrides: CliOverrides) -> Result<Self> {
        let config = Self::load()?
            .with_env_overrides()
            .with_cli_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.graph.max_title_length == 0 {
            return Err(Error::Config(
                "max_title_length must be greater than zero".to_string(),
            ));
        }
        if self.github.api_url.trim().is_empty() {
            return Err(Error::Config("github.api_url must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.graph.max_title_length, 50);
        assert_eq!(
            config.graph.primary_branch_names,
            vec!["main", "master", "develop"]
        );
        assert_eq!(config.output.dir, PathBuf::new());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(CliOverrides {
            api_url: Some("https://ghe.example.com/api/v3".to_string()),
            output_dir: Some(PathBuf::from("/tmp/graphs")),
            max_title_length: Some(20),
        });

        assert_eq!(config.github.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.output.dir, PathBuf::from("/tmp/graphs"));
        assert_eq!(config.graph.max_title_length, 20);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[graph]
primary_branch_names = ["trunk"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.graph.primary_branch_names, vec!["trunk"]);
        // everything else falls back to defaults
        assert_eq!(config.graph.max_title_length, 50);
        assert_eq!(config.github.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_from_file_rejects_zero_title_length() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[graph]\nmax_title_length = 0").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("max_title_length"));
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[graph\nmax_title_length = ").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_truncate_title() {
        let graph = GraphConfig {
            max_title_length: 5,
            ..GraphConfig::default()
        };
        assert_eq!(graph.truncate_title("Hello world"), "Hello");
        assert_eq!(graph.truncate_title("Hi"), "Hi");
        assert_eq!(graph.truncate_title("Hello"), "Hello");
    }

    #[test]
    fn test_truncate_title_is_idempotent() {
        let graph = GraphConfig::default();
        let titles = [
            "",
            "short",
            "exactly fifty characters long, padded out to fifty",
            "a much longer title that definitely goes past the fifty character limit",
            "ünïcödé títlé thät ïs wäy lönger thän fïfty chäräctërs ïn tötäl",
        ];
        for title in titles {
            let once = graph.truncate_title(title);
            assert!(once.chars().count() <= 50);
            assert_eq!(graph.truncate_title(once), once);
        }
    }

    #[test]
    fn test_truncate_title_respects_char_boundaries() {
        let graph = GraphConfig {
            max_title_length: 3,
            ..GraphConfig::default()
        };
        assert_eq!(graph.truncate_title("äöüß"), "äöü");
    }

    #[test]
    fn test_primary_segment_matching() {
        let graph = GraphConfig::default();
        assert!(graph.has_primary_segment("main"));
        assert!(graph.has_primary_segment("release/main"));
        assert!(graph.has_primary_segment("Team/Develop"));
        assert!(graph.has_primary_segment("master"));
        assert!(!graph.has_primary_segment("feature/main-redesign"));
        assert!(!graph.has_primary_segment("mainline"));
    }
}
