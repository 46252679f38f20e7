//! Configuration source discovery and loading.

use std::fs;
use std::path::Path;

use crate::loader::{parse_config, ConfigError, Format};
use crate::schema::SiteConfig;

/// File names probed by [`discover_config`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["site.toml", "site.yaml", "site.yml", "site.json"];

/// Load and validate a site configuration file.
///
/// The format is detected from the file extension. Reading the file is the
/// only side effect; a file that cannot be read, parsed, or validated fails
/// the load as a whole.
pub fn load_config(path: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
    let path = path.as_ref();

    let format = Format::from_path(path).ok_or_else(|| {
        ConfigError::SourceUnreadable(format!("Unsupported config format: {}", path.display()))
    })?;

    let source = fs::read_to_string(path)
        .map_err(|e| ConfigError::SourceUnreadable(format!("{}: {}", path.display(), e)))?;

    let config = parse_config(&source, format)?;
    tracing::info!("Loaded site config from {}", path.display());

    Ok(config)
}

/// Find and load a site configuration in `dir`.
///
/// Probes [`CONFIG_FILE_NAMES`] in order and loads the first file that
/// exists.
pub fn discover_config(dir: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
    let dir = dir.as_ref();

    for name in CONFIG_FILE_NAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return load_config(candidate);
        }
    }

    Err(ConfigError::SourceUnreadable(format!(
        "No site config found in {}",
        dir.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TOML_CONFIG: &str = r#"
url = "https://blog.example.com"
title = "Example Blog"
postsPerPage = 4

[author]
name = "Jane Doe"
photo = "/photo.jpg"
"#;

    const JSON_CONFIG: &str = r#"{
  "url": "https://blog.example.com",
  "title": "From JSON",
  "postsPerPage": 2,
  "author": { "name": "Jane Doe", "photo": "/photo.jpg" }
}"#;

    #[test]
    fn loads_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, TOML_CONFIG).unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.title, "Example Blog");
        assert_eq!(config.posts_per_page, 4);
    }

    #[test]
    fn missing_file_is_source_unreadable() {
        let temp = tempdir().unwrap();

        let err = load_config(temp.path().join("site.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::SourceUnreadable(_)));
    }

    #[test]
    fn unsupported_extension_is_source_unreadable() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.ini");
        fs::write(&path, "url = x").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::SourceUnreadable(_)));
    }

    #[test]
    fn discovers_config_in_priority_order() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("site.json"), JSON_CONFIG).unwrap();
        fs::write(temp.path().join("site.toml"), TOML_CONFIG).unwrap();

        // site.toml wins over site.json.
        let config = discover_config(temp.path()).unwrap();
        assert_eq!(config.title, "Example Blog");
    }

    #[test]
    fn discovers_json_config_when_alone() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("site.json"), JSON_CONFIG).unwrap();

        let config = discover_config(temp.path()).unwrap();
        assert_eq!(config.title, "From JSON");
        assert_eq!(config.posts_per_page, 2);
    }

    #[test]
    fn empty_directory_is_source_unreadable() {
        let temp = tempdir().unwrap();

        let err = discover_config(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::SourceUnreadable(_)));
    }
}
