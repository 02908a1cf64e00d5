//! Menu workflows over the configured menu document and menu page.
//!
//! Every operation reads what it needs, computes, then writes at most once
//! per file. Any read or extraction failure aborts before the first write.

use lex_config::SiteConfig;
use lex_core::api::MenuResponse;
use lex_core::{MenuDocument, MenuEntry, SyncReport};
use lex_parser::{extract_menu, render_nav_items, replace_nav};
use lex_store::{MenuStore, PageStore};

use crate::compare::compare_menus;
use crate::edit::{delete_entry, normalize_orders, validate_menu};
use crate::error::SyncError;
use crate::merge::auto_sync_menus;

/// A completed auto-sync.
#[derive(Debug, Clone)]
pub struct SyncResult {
    pub document: MenuDocument,
    pub added: Vec<MenuEntry>,
}

/// A completed deletion.
#[derive(Debug, Clone)]
pub struct DeleteResult {
    pub document: MenuDocument,
    pub deleted: MenuEntry,
}

pub struct MenuSyncService {
    site: SiteConfig,
    menu: MenuStore,
    pages: PageStore,
}

impl MenuSyncService {
    #[must_use]
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            site: site.clone(),
            menu: MenuStore::new(site.menu_path()),
            pages: PageStore::new(site.root_dir()),
        }
    }

    #[must_use]
    pub const fn menu_store(&self) -> &MenuStore {
        &self.menu
    }

    /// Navigation entries currently in the menu page.
    ///
    /// # Errors
    ///
    /// `SyncError::Store` if the page cannot be read, `SyncError::Extraction`
    /// if it has no navigation list.
    pub fn html_menu(&self) -> Result<Vec<MenuEntry>, SyncError> {
        let html = self
            .pages
            .read_html(self.site.menu_locale, &self.site.menu_page)?;
        Ok(extract_menu(&html, &self.site.nav_list_id)?)
    }

    /// The menu document plus a lightweight sync status.
    ///
    /// An unreadable menu page does not fail the call; the status is then
    /// omitted.
    ///
    /// # Errors
    ///
    /// `SyncError::Store` if the menu document cannot be loaded.
    pub fn summary(&self) -> Result<MenuResponse, SyncError> {
        let document = self.menu.load()?;
        let sync_status = match self.html_menu() {
            Ok(html) => Some(compare_menus(&html, &document.main_menu).summary()),
            Err(error) => {
                tracing::warn!(%error, "sync status unavailable");
                None
            }
        };
        Ok(MenuResponse {
            document,
            sync_status,
        })
    }

    /// Full comparison of the navigation markup against the menu document.
    ///
    /// # Errors
    ///
    /// Fails if either side cannot be read.
    pub fn validate(&self) -> Result<SyncReport, SyncError> {
        let document = self.menu.load()?;
        let html = self.html_menu()?;
        Ok(compare_menus(&html, &document.main_menu))
    }

    /// Merge HTML-only entries into the menu document and persist it once,
    /// stamping `lastSyncedAt`.
    ///
    /// # Errors
    ///
    /// Fails without writing if either side cannot be read.
    pub fn sync(&self) -> Result<SyncResult, SyncError> {
        let mut document = self.menu.load()?;
        let html = self.html_menu()?;

        let outcome = auto_sync_menus(&html, &document.main_menu);
        document.main_menu = outcome.menu;
        let document = self.menu.save_synced(&document)?;

        tracing::info!(added = outcome.added.len(), "menu auto-sync complete");
        Ok(SyncResult {
            document,
            added: outcome.added,
        })
    }

    /// Replace the menu document and regenerate the navigation markup from it.
    ///
    /// The new page markup is computed before anything is written, so a page
    /// without a navigation list leaves both files unchanged. The page is
    /// written first; if the menu document then fails to save, the previous
    /// page markup is written back. A crash between the two writes can still
    /// leave the page ahead of the document.
    ///
    /// # Errors
    ///
    /// `SyncError::InvalidMenu` for a structurally invalid tree, otherwise
    /// read, extraction, or write failures.
    pub fn replace(&self, mut entries: Vec<MenuEntry>) -> Result<MenuDocument, SyncError> {
        validate_menu(&entries)?;
        normalize_orders(&mut entries);

        let locale = self.site.menu_locale;
        let page = &self.site.menu_page;
        let html = self.pages.read_html(locale, page)?;
        let regenerated = replace_nav(&html, &self.site.nav_list_id, &entries)?;

        let mut document = match self.menu.load() {
            Ok(existing) => existing,
            Err(lex_store::StoreError::NotFound { .. }) => MenuDocument::new(Vec::new()),
            Err(error) => return Err(error.into()),
        };
        document.main_menu = entries;

        self.pages.write_html(locale, page, &regenerated)?;
        let document = match self.menu.save(&document) {
            Ok(saved) => saved,
            Err(error) => {
                tracing::warn!(%error, "menu save failed; restoring navigation markup");
                if let Err(restore) = self.pages.write_html(locale, page, &html) {
                    tracing::error!(error = %restore, "failed to restore navigation markup");
                }
                return Err(error.into());
            }
        };

        tracing::info!(entries = document.total_entries(), "menu replaced");
        Ok(document)
    }

    /// Remove an entry (at any depth) from the menu document.
    ///
    /// Only the JSON document changes; run a replace or edit the page to
    /// bring the markup along.
    ///
    /// # Errors
    ///
    /// `SyncError::EntryNotFound` if no entry has this id.
    pub fn delete(&self, id: &str) -> Result<DeleteResult, SyncError> {
        let mut document = self.menu.load()?;
        let deleted = delete_entry(&mut document.main_menu, id)?;
        let document = self.menu.save(&document)?;
        tracing::info!(id, "menu item deleted");
        Ok(DeleteResult { document, deleted })
    }

    /// Navigation markup the current menu document would render to.
    ///
    /// # Errors
    ///
    /// `SyncError::Store` if the menu document cannot be loaded.
    pub fn render_preview(&self) -> Result<String, SyncError> {
        let document = self.menu.load()?;
        Ok(render_nav_items(&document.main_menu, ""))
    }
}
