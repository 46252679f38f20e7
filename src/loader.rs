//! Validating configuration parser.
//!
//! Deserializes a configuration document into a generic value, checks every
//! field against the schema, and produces a [`SiteConfig`]. Validation is a
//! single-shot transformation with no side effects; any failure is fatal for
//! the load as a whole.

use std::path::Path;

use serde_json::{Map, Value};
use url::Url;

use crate::schema::{Author, AuthorContacts, MenuEntry, SiteConfig};

/// Supported configuration source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str())? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Errors that can occur when loading a site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required field `{0}`")]
    MissingField(String),

    #[error("Invalid type for `{field}`: expected {expected}, found {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid value for `{field}`: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Failed to read configuration: {0}")]
    SourceUnreadable(String),
}

const KNOWN_KEYS: &[&str] = &[
    "url",
    "title",
    "subtitle",
    "copyright",
    "disqusShortname",
    "postsPerPage",
    "googleAnalyticsId",
    "menu",
    "author",
];

/// Parse and validate a configuration document.
///
/// Absent optional fields are substituted with their documented defaults
/// (empty string, empty menu, all-empty contacts); absent required fields
/// fail with [`ConfigError::MissingField`].
pub fn parse_config(source: &str, format: Format) -> Result<SiteConfig, ConfigError> {
    let value: Value = match format {
        Format::Json => serde_json::from_str(source)
            .map_err(|e| ConfigError::SourceUnreadable(format!("Invalid JSON: {e}")))?,
        Format::Yaml => serde_yaml::from_str(source)
            .map_err(|e| ConfigError::SourceUnreadable(format!("Invalid YAML: {e}")))?,
        Format::Toml => toml::from_str(source)
            .map_err(|e| ConfigError::SourceUnreadable(format!("Invalid TOML: {e}")))?,
    };

    validate(value)
}

fn validate(value: Value) -> Result<SiteConfig, ConfigError> {
    let root = match value {
        Value::Object(root) => root,
        other => {
            return Err(ConfigError::InvalidType {
                field: "(root)".to_string(),
                expected: "object",
                found: type_name(&other),
            })
        }
    };

    for key in root.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            tracing::warn!("Ignoring unknown configuration key `{}`", key);
        }
    }

    let url = required_string(&root, "url", "url")?;
    validate_url("url", &url)?;

    Ok(SiteConfig {
        url,
        title: required_string(&root, "title", "title")?,
        subtitle: optional_string(&root, "subtitle", "subtitle")?,
        copyright: optional_string(&root, "copyright", "copyright")?,
        disqus_shortname: optional_string(&root, "disqusShortname", "disqusShortname")?,
        posts_per_page: parse_posts_per_page(&root)?,
        google_analytics_id: optional_string(&root, "googleAnalyticsId", "googleAnalyticsId")?,
        menu: parse_menu(&root)?,
        author: parse_author(&root)?,
    })
}

fn parse_posts_per_page(root: &Map<String, Value>) -> Result<u32, ConfigError> {
    match root.get("postsPerPage") {
        None | Some(Value::Null) => Err(ConfigError::MissingField("postsPerPage".to_string())),
        Some(Value::Number(n)) => match n.as_u64().and_then(|v| u32::try_from(v).ok()) {
            Some(v) if v >= 1 => Ok(v),
            _ => Err(ConfigError::InvalidValue {
                field: "postsPerPage".to_string(),
                message: format!("must be a positive integer, got {}", n),
            }),
        },
        Some(other) => Err(invalid_type("postsPerPage", "integer", other)),
    }
}

fn parse_menu(root: &Map<String, Value>) -> Result<Vec<MenuEntry>, ConfigError> {
    let items = match root.get("menu") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(invalid_type("menu", "array", other)),
    };

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry = match item {
            Value::Object(entry) => entry,
            other => return Err(invalid_type(&format!("menu[{index}]"), "object", other)),
        };

        let label = required_string(entry, "label", &format!("menu[{index}].label"))?;
        let path = required_string(entry, "path", &format!("menu[{index}].path"))?;
        validate_route(&format!("menu[{index}].path"), &path)?;

        entries.push(MenuEntry { label, path });
    }

    Ok(entries)
}

fn parse_author(root: &Map<String, Value>) -> Result<Author, ConfigError> {
    let table = match root.get("author") {
        None | Some(Value::Null) => return Err(ConfigError::MissingField("author".to_string())),
        Some(Value::Object(table)) => table,
        Some(other) => return Err(invalid_type("author", "object", other)),
    };

    Ok(Author {
        name: required_string(table, "name", "author.name")?,
        photo: required_string(table, "photo", "author.photo")?,
        bio: optional_string(table, "bio", "author.bio")?,
        contacts: parse_contacts(table)?,
    })
}

fn parse_contacts(author: &Map<String, Value>) -> Result<AuthorContacts, ConfigError> {
    let table = match author.get("contacts") {
        None | Some(Value::Null) => return Ok(AuthorContacts::default()),
        Some(Value::Object(table)) => table,
        Some(other) => return Err(invalid_type("author.contacts", "object", other)),
    };

    Ok(AuthorContacts {
        email: optional_string(table, "email", "author.contacts.email")?,
        linkedin: optional_string(table, "linkedin", "author.contacts.linkedin")?,
        github: optional_string(table, "github", "author.contacts.github")?,
        twitter: optional_string(table, "twitter", "author.contacts.twitter")?,
        rss: optional_string(table, "rss", "author.contacts.rss")?,
    })
}

/// Look up a required string field. Absent or null fails with `MissingField`,
/// empty fails with `InvalidValue`.
fn required_string(
    table: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<String, ConfigError> {
    match table.get(key) {
        None | Some(Value::Null) => Err(ConfigError::MissingField(path.to_string())),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ConfigError::InvalidValue {
            field: path.to_string(),
            message: "must not be empty".to_string(),
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(invalid_type(path, "string", other)),
    }
}

/// Look up an optional string field. Absent or null becomes the empty string.
fn optional_string(
    table: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<String, ConfigError> {
    match table.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(invalid_type(path, "string", other)),
    }
}

fn validate_url(path: &str, raw: &str) -> Result<(), ConfigError> {
    match Url::parse(raw) {
        Ok(_) => Ok(()),
        Err(e) => Err(ConfigError::InvalidValue {
            field: path.to_string(),
            message: e.to_string(),
        }),
    }
}

// Routes are site-internal: absolute when `/`-prefixed, relative otherwise.
fn validate_route(path: &str, route: &str) -> Result<(), ConfigError> {
    if route.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            field: path.to_string(),
            message: "route must not contain whitespace".to_string(),
        });
    }
    Ok(())
}

fn invalid_type(path: &str, expected: &'static str, found: &Value) -> ConfigError {
    ConfigError::InvalidType {
        field: path.to_string(),
        expected,
        found: type_name(found),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
