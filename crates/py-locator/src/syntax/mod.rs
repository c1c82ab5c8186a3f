pub mod ast;
pub mod builder;
pub mod cst;
pub mod helpers;
pub mod kind;
pub mod line_index;

use std::sync::Arc;

use lsp_types::{Position, Range};
use rowan::{GreenNode, TextRange, TextSize};

use crate::error::LocateError;
use crate::syntax::cst::SyntaxNode;
use crate::syntax::line_index::LineIndex;

pub use builder::SyntaxTreeBuilder;
pub use helpers::leading_whitespace;

/// Immutable syntax snapshot of one Python source file.
///
/// Cloning is cheap and the snapshot is `Send + Sync`; cursors into it are
/// created per use through [`SyntaxTree::root`].
#[derive(Clone)]
pub struct SyntaxTree {
    green: GreenNode,
    source: Arc<str>,
    line_index: Arc<LineIndex>,
}

impl SyntaxTree {
    /// Wrap a finished green tree. The source text is the tree's own text,
    /// so offsets in the tree and in [`SyntaxTree::source`] always agree.
    pub fn new(green: GreenNode) -> Self {
        let source: Arc<str> = Arc::from(SyntaxNode::new_root(green.clone()).text().to_string());
        let line_index = Arc::new(LineIndex::new(&source));
        Self {
            green,
            source,
            line_index,
        }
    }

    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn offset_at(
        &self,
        position: Position,
    ) -> Result<TextSize, LocateError> {
        self.line_index.offset(&self.source, position)
    }

    pub fn position_at(
        &self,
        offset: TextSize,
    ) -> Position {
        self.line_index.position(&self.source, offset)
    }

    pub fn span_of(
        &self,
        range: TextRange,
    ) -> Range {
        self.line_index.range(&self.source, range)
    }

    /// Source text covered by `range`, or `None` when the range is outside the text.
    pub fn text_of(
        &self,
        range: TextRange,
    ) -> Option<&str> {
        self.source.get(usize::from(range.start())..usize::from(range.end()))
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{:#?}", self.root())
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/tree_tests.rs"]
mod tests;
