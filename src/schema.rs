//! Site configuration schema.

use serde::{Deserialize, Serialize};

/// Validated site configuration.
///
/// Built once by [`crate::load_config`] (or [`crate::parse_config`]) and read
/// for the rest of the process lifetime. Every field is present after a
/// successful load: optional values that were absent in the source are empty
/// strings (or an empty menu), never missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Canonical site URL, kept exactly as written in the source.
    pub url: String,

    /// Site title (required)
    pub title: String,

    /// Tagline shown under the title
    #[serde(default)]
    pub subtitle: String,

    /// Footer copyright line
    #[serde(default)]
    pub copyright: String,

    /// Disqus forum shortname, empty when comments are disabled
    #[serde(default)]
    pub disqus_shortname: String,

    /// Posts listed per index page (always >= 1)
    pub posts_per_page: u32,

    /// Google Analytics tracking id, empty when analytics is disabled
    #[serde(default)]
    pub google_analytics_id: String,

    /// Navigation links in display order
    #[serde(default)]
    pub menu: Vec<MenuEntry>,

    /// Site author
    pub author: Author,
}

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Link text (required)
    pub label: String,

    /// Route the link points at, absolute (`/pages/about`) or relative
    pub path: String,
}

/// Site author metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Display name (required)
    pub name: String,

    /// Path or URL of the author photo (required)
    pub photo: String,

    /// Short biography
    #[serde(default)]
    pub bio: String,

    /// Contact channels
    #[serde(default)]
    pub contacts: AuthorContacts,
}

/// Named contact channels, each empty when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorContacts {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub rss: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> SiteConfig {
        SiteConfig {
            url: "https://blog.example.com".to_string(),
            title: "Example Blog".to_string(),
            subtitle: String::new(),
            copyright: "©2024 All rights reserved.".to_string(),
            disqus_shortname: String::new(),
            posts_per_page: 4,
            google_analytics_id: String::new(),
            menu: vec![MenuEntry {
                label: "Articles".to_string(),
                path: "/".to_string(),
            }],
            author: Author {
                name: "Jane Doe".to_string(),
                photo: "/photo.jpg".to_string(),
                bio: String::new(),
                contacts: AuthorContacts::default(),
            },
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let root = value.as_object().unwrap();

        assert!(root.contains_key("postsPerPage"));
        assert!(root.contains_key("disqusShortname"));
        assert!(root.contains_key("googleAnalyticsId"));
        assert!(!root.contains_key("posts_per_page"));
    }

    #[test]
    fn round_trips_through_derived_serde() {
        let config = sample();
        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back, config);
    }

    #[test]
    fn derived_deserialize_defaults_optional_fields() {
        let json = r#"{
            "url": "https://blog.example.com",
            "title": "Example Blog",
            "postsPerPage": 4,
            "author": { "name": "Jane Doe", "photo": "/photo.jpg" }
        }"#;

        let config: SiteConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.subtitle, "");
        assert_eq!(config.menu, vec![]);
        assert_eq!(config.author.contacts, AuthorContacts::default());
    }
}
