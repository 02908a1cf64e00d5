//! # lex-parser
//!
//! ast-grep-based HTML parsing for Lexsite.
//!
//! - **Menu extraction**: reads the designated navigation `<ul>` into a
//!   `MenuEntry` tree comparable with the menu JSON document
//! - **Content regions**: reads and rewrites the fixed page fields (title,
//!   h1, meta description, main) and the `data-region` sections
//! - **Navigation rendering**: regenerates the navigation list from a menu
//!   tree, leaving the rest of the page untouched
//!
//! Every edit is a byte-range splice located through the tree-sitter HTML
//! grammar, so untouched markup is preserved exactly.

pub mod error;
pub mod html;
pub mod menu;
pub mod parser;
pub mod regions;
pub mod render;

pub use error::ParserError;
pub use menu::extract_menu;
pub use regions::{apply_page_update, list_sections, read_page_content, read_section, replace_section};
pub use render::{render_nav_items, replace_nav};
