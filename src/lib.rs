//! Validated site configuration for static blog generation.
//!
//! This crate loads a site configuration document (TOML, YAML, or JSON),
//! validates every field, and exposes an immutable [`SiteConfig`] value.
//! Consumers load the configuration once at startup and read fields from it
//! for the remainder of the process lifetime; a malformed configuration is a
//! startup-fatal condition and surfaces as a [`ConfigError`].

pub mod loader;
pub mod schema;
pub mod source;

pub use loader::{parse_config, ConfigError, Format};
pub use schema::{Author, AuthorContacts, MenuEntry, SiteConfig};
pub use source::{discover_config, load_config, CONFIG_FILE_NAMES};
