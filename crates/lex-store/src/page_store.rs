//! Localized HTML page store.
//!
//! Pages live at `{root}/{locale}/{name}.html`. Every edit reads the file,
//! splices the targeted region through `lex-parser` and writes the result
//! back atomically.

use std::fs;
use std::path::{Path, PathBuf};

use lex_core::page::{PageContent, PageUpdate, SectionInfo, is_valid_page_name};
use lex_core::Locale;
use lex_parser::regions;

use crate::error::StoreError;
use crate::fs::{read_to_string, write_atomic};

pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a page file, rejecting names that are not lowercase slugs.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidPageName` for names outside `[a-z0-9-]+`.
    pub fn page_path(&self, locale: Locale, name: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_page_name(name) {
            return Err(StoreError::InvalidPageName(name.to_string()));
        }
        Ok(self
            .root
            .join(locale.as_str())
            .join(format!("{name}.html")))
    }

    /// Raw HTML of a page.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the page does not exist.
    pub fn read_html(&self, locale: Locale, name: &str) -> Result<String, StoreError> {
        read_to_string(&self.page_path(locale, name)?)
    }

    /// Overwrite a page's HTML.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the file cannot be written.
    pub fn write_html(&self, locale: Locale, name: &str, html: &str) -> Result<(), StoreError> {
        let path = self.page_path(locale, name)?;
        write_atomic(&path, html)?;
        tracing::info!(locale = %locale, page = name, bytes = html.len(), "wrote page");
        Ok(())
    }

    /// Page names available for a locale, sorted. A missing locale
    /// directory yields an empty list.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the directory cannot be read.
    pub fn list_pages(&self, locale: Locale) -> Result<Vec<String>, StoreError> {
        let dir = self.root.join(locale.as_str());
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&dir, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_valid_page_name(stem) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// # Errors
    ///
    /// `StoreError::NotFound` if the page does not exist.
    pub fn read_page(&self, locale: Locale, name: &str) -> Result<PageContent, StoreError> {
        let html = self.read_html(locale, name)?;
        Ok(regions::read_page_content(&html))
    }

    /// Apply a partial update and return the page content as written.
    ///
    /// An empty update leaves the file untouched.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` for a missing page, `StoreError::Parser` when a
    /// field to update has no element in the page.
    pub fn update_page(
        &self,
        locale: Locale,
        name: &str,
        update: &PageUpdate,
    ) -> Result<PageContent, StoreError> {
        let html = self.read_html(locale, name)?;
        if update.is_empty() {
            return Ok(regions::read_page_content(&html));
        }
        let updated = regions::apply_page_update(&html, update)?;
        self.write_html(locale, name, &updated)?;
        Ok(regions::read_page_content(&updated))
    }

    /// # Errors
    ///
    /// `StoreError::NotFound` if the page does not exist.
    pub fn list_sections(&self, locale: Locale, name: &str) -> Result<Vec<SectionInfo>, StoreError> {
        let html = self.read_html(locale, name)?;
        Ok(regions::list_sections(&html))
    }

    /// # Errors
    ///
    /// `StoreError::NotFound` for a missing page, `StoreError::Parser` for an
    /// unknown or absent section.
    pub fn read_section(
        &self,
        locale: Locale,
        name: &str,
        section: &str,
    ) -> Result<String, StoreError> {
        let html = self.read_html(locale, name)?;
        Ok(regions::read_section(&html, section)?)
    }

    /// Replace a section's inner HTML and return it as stored.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read_section`], plus `StoreError::Io` on write.
    pub fn replace_section(
        &self,
        locale: Locale,
        name: &str,
        section: &str,
        content: &str,
    ) -> Result<String, StoreError> {
        let html = self.read_html(locale, name)?;
        let updated = regions::replace_section(&html, section, content)?;
        self.write_html(locale, name, &updated)?;
        Ok(regions::read_section(&updated, section)?)
    }
}
