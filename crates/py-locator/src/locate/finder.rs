use lsp_types::{Position, Range};
use rowan::TextSize;

use crate::error::LocateError;
use crate::locate::located::LocatedNode;
use crate::locate::options::QueryOptions;
use crate::locate::walker::LocationWalker;
use crate::syntax::SyntaxTree;

/// Maps offsets, positions and ranges in a [`SyntaxTree`] to the most
/// specific node of interest.
///
/// Every query runs its own traversal; a locator holds no per-query state
/// and can be shared freely.
#[derive(Debug, Clone)]
pub struct TreeLocator<'t> {
    tree: &'t SyntaxTree,
    options: QueryOptions,
}

impl<'t> TreeLocator<'t> {
    pub fn new(
        tree: &'t SyntaxTree,
        options: QueryOptions,
    ) -> Self {
        Self {
            tree,
            options,
        }
    }

    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Node at a single offset.
    pub fn find_node(
        &self,
        offset: TextSize,
    ) -> Option<LocatedNode> {
        self.find_node_in(offset, offset)
    }

    /// Node at an LSP position. Positions outside the document are an error.
    pub fn find_node_at(
        &self,
        position: Position,
    ) -> Result<Option<LocatedNode>, LocateError> {
        let offset = self.tree.offset_at(position)?;
        Ok(self.find_node(offset))
    }

    /// Most specific node covering the closed range `[start, end]`.
    pub fn find_node_in(
        &self,
        start: TextSize,
        end: TextSize,
    ) -> Option<LocatedNode> {
        let located = LocationWalker::new(start, end, self.options).walk(&self.tree.root());
        tracing::debug!(
            start = u32::from(start),
            end = u32::from(end),
            kind = ?located.as_ref().map(LocatedNode::kind),
            "located node"
        );
        located
    }

    pub fn find_node_in_range(
        &self,
        range: Range,
    ) -> Result<Option<LocatedNode>, LocateError> {
        let start = self.tree.offset_at(range.start)?;
        let end = self.tree.offset_at(range.end)?;
        Ok(self.find_node_in(start, end))
    }

    pub fn find_node_span(
        &self,
        offset: TextSize,
    ) -> Option<Range> {
        self.find_node(offset).map(|located| self.span_of(&located))
    }

    pub fn find_node_span_at(
        &self,
        position: Position,
    ) -> Result<Option<Range>, LocateError> {
        Ok(self.find_node_at(position)?.map(|located| self.span_of(&located)))
    }

    pub fn find_node_span_in(
        &self,
        start: TextSize,
        end: TextSize,
    ) -> Option<Range> {
        self.find_node_in(start, end).map(|located| self.span_of(&located))
    }

    pub fn find_node_span_in_range(
        &self,
        range: Range,
    ) -> Result<Option<Range>, LocateError> {
        Ok(self.find_node_in_range(range)?.map(|located| self.span_of(&located)))
    }

    fn span_of(
        &self,
        located: &LocatedNode,
    ) -> Range {
        self.tree.span_of(located.range())
    }
}

#[cfg(test)]
#[path = "../../tests/src/locate/finder_tests.rs"]
mod tests;
