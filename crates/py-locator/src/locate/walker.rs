use rowan::{TextRange, TextSize, WalkEvent};

use crate::locate::located::LocatedNode;
use crate::locate::options::QueryOptions;
use crate::syntax::ast::{AstNode, ClassDef, FunctionDef, MemberExpr, Parameter, Suite};
use crate::syntax::cst::SyntaxNode;
use crate::syntax::kind::SyntaxKind;

/// One-shot traversal that records the most specific node covering the
/// closed query range `[start, end]`.
///
/// Nodes are visited in pre-order and every recorded candidate replaces the
/// previous one, so the innermost covering node of an enabled kind wins.
/// Definitions are the exception: they are considered on leave, after
/// their children, and only when the query sits in the header.
pub(crate) struct LocationWalker {
    start: TextSize,
    end: TextSize,
    options: QueryOptions,
    best: Option<LocatedNode>,
}

impl LocationWalker {
    pub(crate) fn new(
        start: TextSize,
        end: TextSize,
        options: QueryOptions,
    ) -> Self {
        Self {
            start,
            end,
            options,
            best: None,
        }
    }

    pub(crate) fn walk(
        mut self,
        root: &SyntaxNode,
    ) -> Option<LocatedNode> {
        let mut preorder = root.preorder();
        while let Some(event) = preorder.next() {
            match event {
                WalkEvent::Enter(node) => {
                    if !self.enter(&node) {
                        preorder.skip_subtree();
                    }
                },
                WalkEvent::Leave(node) => self.leave(&node),
            }
        }
        self.best
    }

    /// Returns whether to descend into `node`.
    fn enter(
        &mut self,
        node: &SyntaxNode,
    ) -> bool {
        // Nothing below a node that misses the start can cover the query.
        if !node.text_range().contains_inclusive(self.start) {
            return false;
        }

        match node.kind() {
            SyntaxKind::CallExpr => self.save(node, self.options.calls),
            SyntaxKind::ConstantExpr => self.save(node, self.options.literals),
            SyntaxKind::NameExpr => self.save(node, self.options.names),
            SyntaxKind::Parameter => {
                let wanted = self.options.parameter_names && self.in_parameter_name(node);
                self.save(node, wanted)
            },
            SyntaxKind::MemberExpr => self.save_member(node),
            _ => true,
        }
    }

    fn leave(
        &mut self,
        node: &SyntaxNode,
    ) {
        let wanted = match node.kind() {
            SyntaxKind::ClassDef => {
                self.options.class_definition
                    && ClassDef::cast(node.clone()).is_some_and(|class| self.in_header(class.body()))
            },
            SyntaxKind::FunctionDef => {
                self.options.function_definition
                    && FunctionDef::cast(node.clone()).is_some_and(|function| self.in_header(function.body()))
            },
            _ => return,
        };

        if wanted && self.covers(node.text_range()) {
            self.record(LocatedNode::Node(node.clone()));
        }
    }

    /// Record `node` when it also covers the query end and `wanted` holds.
    /// Returns whether to descend.
    fn save(
        &mut self,
        node: &SyntaxNode,
        wanted: bool,
    ) -> bool {
        if !node.text_range().contains_inclusive(self.end) {
            return false;
        }
        if wanted {
            self.record(LocatedNode::Node(node.clone()));
        }
        true
    }

    fn save_member(
        &mut self,
        node: &SyntaxNode,
    ) -> bool {
        let Some(member) = MemberExpr::cast(node.clone()) else {
            return true;
        };
        let name_header = member.name_header();
        let wanted = self.options.members && self.start >= name_header;
        if !self.save(node, wanted) {
            return false;
        }

        if wanted
            && self.options.member_name
            && let Some(name) = member.name()
        {
            self.record(LocatedNode::MemberName {
                name,
                range: TextRange::new(name_header, node.text_range().end()),
            });
        }
        true
    }

    fn record(
        &mut self,
        located: LocatedNode,
    ) {
        tracing::trace!(kind = ?located.kind(), range = ?located.range(), "candidate");
        self.best = Some(located);
    }

    fn covers(
        &self,
        range: TextRange,
    ) -> bool {
        range.contains_inclusive(self.start) && range.contains_inclusive(self.end)
    }

    /// The query must start within the name's length from the parameter's
    /// start, not on its annotation or default value. A `*`/`**` prefix
    /// counts against that length.
    fn in_parameter_name(
        &self,
        node: &SyntaxNode,
    ) -> bool {
        Parameter::cast(node.clone())
            .and_then(|parameter| parameter.name_token())
            .is_some_and(|name| self.start <= node.text_range().start() + name.text_range().len())
    }

    /// Whether the query starts in a definition's header: before the body's
    /// first statement and before the trivia (indentation, line breaks,
    /// comments) leading up to it. A definition without a body is all header.
    fn in_header(
        &self,
        body: Option<Suite>,
    ) -> bool {
        let Some(body) = body else {
            return true;
        };
        let body_start = body.body_start();
        if self.start >= body_start {
            return false;
        }

        let whitespace = body.leading_whitespace();
        if whitespace.is_empty() {
            return false;
        }
        body_start
            .checked_sub(TextSize::of(whitespace.as_str()))
            .is_some_and(|header_end| self.start < header_end)
    }
}

#[cfg(test)]
#[path = "../../tests/src/locate/walker_tests.rs"]
mod tests;
