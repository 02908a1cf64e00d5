//! # lex-config
//!
//! Layered configuration loading for Lexsite using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEXSITE_*` prefix, `__` as separator)
//! 2. Project-level `.lexsite/config.toml`
//! 3. User-level `~/.config/lexsite/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEXSITE_AUTH__TOKEN_SECRET` -> `auth.token_secret`,
//! `LEXSITE_SITE__ROOT` -> `site.root`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lex_config::LexConfig;
//!
//! let config = LexConfig::load_with_dotenv().expect("config");
//! println!("serving pages from {}", config.site.root);
//! ```

mod auth;
mod error;
mod server;
mod site;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use site::SiteConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl LexConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the site section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.site.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".lexsite/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LEXSITE_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexsite").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LexConfig::default();
        assert!(!config.auth.is_configured());
        assert_eq!(config.site.nav_list_id, "main-menu");
        assert_eq!(config.server.port, 8787);
    }

    #[test]
    fn env_overrides_nested_fields() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LEXSITE_SERVER__PORT", "9100");
            jail.set_env("LEXSITE_SITE__ROOT", "/srv/firm");
            let config = LexConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.site.root, "/srv/firm");
            Ok(())
        });
    }

    #[test]
    fn project_file_is_layered_under_env() {
        figment::Jail::expect_with(|jail| {
            std::fs::create_dir_all(jail.directory().join(".lexsite"))
                .map_err(|e| e.to_string())?;
            jail.create_file(
                ".lexsite/config.toml",
                r#"
                [site]
                nav_list_id = "primary-nav"
                menu_locale = "he"

                [auth]
                token_ttl_secs = 600
                "#,
            )?;
            jail.set_env("LEXSITE_AUTH__TOKEN_TTL_SECS", "1200");

            let config = LexConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.site.nav_list_id, "primary-nav");
            assert_eq!(config.site.menu_locale, lex_core::Locale::He);
            assert_eq!(config.auth.token_ttl_secs, 1200);
            Ok(())
        });
    }

    #[test]
    fn invalid_site_section_fails_load() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LEXSITE_SITE__MENU_PAGE", "Not A Slug");
            let result = LexConfig::load();
            assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
            Ok(())
        });
    }
}
