use rowan::TextRange;

use crate::syntax::cst::SyntaxNode;
use crate::syntax::kind::SyntaxKind;

/// Result of a location query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocatedNode {
    /// A node of the tree.
    Node(SyntaxNode),
    /// The attribute name of a member access, standing in for the whole
    /// access. Behaves like a name reference spanning just the attribute.
    MemberName {
        name: String,
        range: TextRange,
    },
}

impl LocatedNode {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Self::Node(node) => node.kind(),
            Self::MemberName { .. } => SyntaxKind::NameExpr,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            Self::Node(node) => node.text_range(),
            Self::MemberName {
                range, ..
            } => *range,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Self::Node(node) => node.text().to_string(),
            Self::MemberName {
                name, ..
            } => name.clone(),
        }
    }

    /// The underlying tree node, if this is not a synthetic member name.
    pub fn syntax(&self) -> Option<&SyntaxNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::MemberName { .. } => None,
        }
    }

    pub fn is_member_name(&self) -> bool {
        matches!(self, Self::MemberName { .. })
    }
}
