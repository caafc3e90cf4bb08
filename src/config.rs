use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub render: RenderOptions,
    pub output: OutputConfig,
}

/// Options recognised by the HTML serializer.
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Colour fenced code blocks whose language the highlighter knows.
    pub highlight: bool,
    pub theme: Theme,
    /// Href of the stylesheet linked from the document head.
    pub stylesheet: String,
    /// Document title. Falls back to the first level-1 header.
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlight: true,
            theme: Theme::Light,
            stylesheet: "style.css".to_string(),
            title: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension used for the output file when none is given.
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: "html".to_string(),
        }
    }
}

/// Document colour theme.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a theme name. Only the exact name `dark` selects the dark
    /// theme; anything else is light.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Class applied to the root `<html>` element.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Theme::from_name(&name)
    }
}

impl Config {
    /// Config parsed from the embedded `default_config.toml`.
    pub fn compiled_default() -> Self {
        // Validated by build.rs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn unknown_theme_is_light() {
        assert_eq!(Theme::from_name("solarized"), Theme::Light);
        assert_eq!(Theme::from_name(""), Theme::Light);
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("light"), Theme::Light);
    }

    #[test]
    fn theme_names_are_exact() {
        assert_eq!(Theme::from_name("Dark"), Theme::Light);
        assert_eq!(Theme::from_name("DARK"), Theme::Light);
        assert_eq!(Theme::from_name("dark "), Theme::Light);
    }

    #[test]
    fn partial_render_section_keeps_defaults() {
        let config: Config = toml::from_str("[render]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(config.render.theme, Theme::Dark);
        assert!(config.render.highlight);
        assert_eq!(config.render.stylesheet, "style.css");
        assert_eq!(config.output.extension, "html");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: Config =
            toml::from_str("[render]\nhighlight = false\nfancy = 3\n\n[watch]\ndelay = 10\n")
                .unwrap();
        assert!(!config.render.highlight);
        assert_eq!(config.render.theme, Theme::Light);
    }

    #[test]
    fn unrecognized_theme_value_is_light() {
        let config: Config = toml::from_str("[render]\ntheme = \"sepia\"\n").unwrap();
        assert_eq!(config.render.theme, Theme::Light);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::compiled_default());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\ntitle = \"Notes\"\n\n[output]\nextension = \"htm\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.render.title.as_deref(), Some("Notes"));
        assert_eq!(config.output.extension, "htm");
    }

    #[test]
    fn load_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render\nhighlight = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
