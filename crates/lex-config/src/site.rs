//! Site layout configuration: where pages and the menu document live.

use std::path::PathBuf;

use lex_core::Locale;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_root() -> String {
    String::from("site")
}

fn default_menu_file() -> String {
    String::from("data/menu.json")
}

fn default_menu_page() -> String {
    String::from("index")
}

const fn default_menu_locale() -> Locale {
    Locale::En
}

fn default_nav_list_id() -> String {
    String::from("main-menu")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Site root; pages live at `{root}/{locale}/{name}.html`.
    #[serde(default = "default_root")]
    pub root: String,

    /// Menu JSON document, relative to `root` unless absolute.
    #[serde(default = "default_menu_file")]
    pub menu_file: String,

    /// Page whose navigation markup mirrors the menu document.
    #[serde(default = "default_menu_page")]
    pub menu_page: String,

    #[serde(default = "default_menu_locale")]
    pub menu_locale: Locale,

    /// `id` of the top-level `<ul>` holding the navigation.
    #[serde(default = "default_nav_list_id")]
    pub nav_list_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            menu_file: default_menu_file(),
            menu_page: default_menu_page(),
            menu_locale: default_menu_locale(),
            nav_list_id: default_nav_list_id(),
        }
    }
}

impl SiteConfig {
    #[must_use]
    pub fn root_dir(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    #[must_use]
    pub fn menu_path(&self) -> PathBuf {
        self.root_dir().join(&self.menu_file)
    }

    #[must_use]
    pub fn menu_page_path(&self) -> PathBuf {
        self.root_dir()
            .join(self.menu_locale.as_str())
            .join(format!("{}.html", self.menu_page))
    }

    /// Check the fields that cannot be defaulted away.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty nav list id or a menu
    /// page name that is not a plain slug.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nav_list_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "site.nav_list_id".into(),
                reason: "must not be empty".into(),
            });
        }
        if !lex_core::page::is_valid_page_name(&self.menu_page) {
            return Err(ConfigError::InvalidValue {
                field: "site.menu_page".into(),
                reason: format!("'{}' is not a lowercase page slug", self.menu_page),
            });
        }
        Ok(())
    }
}
