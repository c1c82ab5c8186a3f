use rowan::{Checkpoint, GreenNodeBuilder};

use crate::syntax::SyntaxTree;
use crate::syntax::kind::SyntaxKind;

/// Event-style construction of a [`SyntaxTree`].
///
/// This is the surface a parser drives: open a node, push its tokens (trivia
/// included, the tree is lossless), close it. Nodes must be balanced before
/// [`SyntaxTreeBuilder::finish`].
pub struct SyntaxTreeBuilder {
    builder: GreenNodeBuilder<'static>,
}

impl SyntaxTreeBuilder {
    pub fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
        }
    }

    pub fn start_node(
        &mut self,
        kind: SyntaxKind,
    ) -> &mut Self {
        self.builder.start_node(kind.into());
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        self.builder.finish_node();
        self
    }

    /// Mark the current position so a node can later be wrapped around
    /// everything pushed after it (left-recursive expressions like `a.b`).
    pub fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    pub fn start_node_at(
        &mut self,
        checkpoint: Checkpoint,
        kind: SyntaxKind,
    ) -> &mut Self {
        self.builder.start_node_at(checkpoint, kind.into());
        self
    }

    pub fn token(
        &mut self,
        kind: SyntaxKind,
        text: &str,
    ) -> &mut Self {
        self.builder.token(kind.into(), text);
        self
    }

    /// Push a word, classified as a keyword when it spells one.
    pub fn word(
        &mut self,
        text: &str,
    ) -> &mut Self {
        let kind = SyntaxKind::from_keyword(text).unwrap_or(SyntaxKind::Ident);
        self.token(kind, text)
    }

    /// Push blank text, split into `Newline` and `Whitespace` tokens.
    pub fn trivia(
        &mut self,
        text: &str,
    ) -> &mut Self {
        let mut rest = text;
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix("\r\n") {
                self.token(SyntaxKind::Newline, "\r\n");
                rest = after;
            } else if let Some(after) = rest.strip_prefix('\n') {
                self.token(SyntaxKind::Newline, "\n");
                rest = after;
            } else {
                let len = rest.find(['\n', '\r']).unwrap_or(rest.len()).max(1);
                self.token(SyntaxKind::Whitespace, &rest[..len]);
                rest = &rest[len..];
            }
        }
        self
    }

    pub fn finish(self) -> SyntaxTree {
        SyntaxTree::new(self.builder.finish())
    }
}

impl Default for SyntaxTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
