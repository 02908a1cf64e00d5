//! ast-grep wrapper for HTML documents.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by [`parse_html`].
pub type HtmlTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// A node borrowed from an [`HtmlTree`].
pub type HtmlNode<'r> = ast_grep_core::Node<'r, StrDoc<SupportLang>>;

/// Parse an HTML document.
///
/// tree-sitter recovers from malformed markup, so parsing itself never fails;
/// missing structure surfaces later as `ParserError` from the lookups.
#[must_use]
pub fn parse_html(source: &str) -> HtmlTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Html.ast_grep(source)
}
