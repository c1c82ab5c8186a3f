use dashmap::DashMap;
use lsp_types::{Position, Range, Url};

use crate::config::LocatorSettings;
use crate::error::LocateError;
use crate::locate::{LocatedNode, QueryOptions, TreeLocator};
use crate::syntax::SyntaxTree;
use crate::syntax::kind::SyntaxKind;

/// Owned summary of a located expression, safe to send across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedExpr {
    pub kind: SyntaxKind,
    pub text: String,
    pub span: Range,
}

impl LocatedExpr {
    fn new(
        tree: &SyntaxTree,
        located: &LocatedNode,
    ) -> Self {
        Self {
            kind: located.kind(),
            text: located.text(),
            span: tree.span_of(located.range()),
        }
    }
}

/// Thread-safe store of syntax trees for all open documents.
///
/// Lookups clone the snapshot out of the map, so no shard lock is held
/// while a query runs.
pub struct TreeStore {
    snapshots: DashMap<Url, SyntaxTree>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self {
            snapshots: DashMap::new(),
        }
    }

    /// Store a tree, replacing any previous snapshot for `uri`.
    pub fn insert(
        &self,
        uri: Url,
        tree: SyntaxTree,
    ) {
        self.snapshots.insert(uri, tree);
    }

    /// Get an Arc-cloned snapshot. No lock held after return.
    pub fn get(
        &self,
        uri: &Url,
    ) -> Option<SyntaxTree> {
        self.snapshots.get(uri).map(|entry| entry.clone())
    }

    pub fn remove(
        &self,
        uri: &Url,
    ) -> Option<SyntaxTree> {
        self.snapshots.remove(uri).map(|(_, tree)| tree)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Expression to describe when hovering at `position`.
    pub fn hover_target(
        &self,
        uri: &Url,
        position: Position,
        settings: &LocatorSettings,
    ) -> Result<Option<LocatedExpr>, LocateError> {
        self.locate(uri, Range::new(position, position), settings.hover)
    }

    /// Expression to evaluate for a selection (or an empty range at the cursor).
    pub fn evaluate_target(
        &self,
        uri: &Url,
        range: Range,
        settings: &LocatorSettings,
    ) -> Result<Option<LocatedExpr>, LocateError> {
        self.locate(uri, range, settings.evaluate)
    }

    fn locate(
        &self,
        uri: &Url,
        range: Range,
        options: QueryOptions,
    ) -> Result<Option<LocatedExpr>, LocateError> {
        let tree = self.snapshot(uri)?;
        let locator = TreeLocator::new(&tree, options);
        let located = locator.find_node_in_range(range)?;
        Ok(located.map(|located| LocatedExpr::new(&tree, &located)))
    }

    fn snapshot(
        &self,
        uri: &Url,
    ) -> Result<SyntaxTree, LocateError> {
        self.get(uri).ok_or_else(|| LocateError::UnknownDocument(uri.clone()))
    }
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/src/store_tests.rs"]
mod tests;
