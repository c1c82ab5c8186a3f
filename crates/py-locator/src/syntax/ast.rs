use rowan::TextSize;

use crate::syntax::cst::{SyntaxNode, SyntaxToken};
use crate::syntax::helpers;
use crate::syntax::kind::SyntaxKind;

pub trait AstNode: Sized {
    fn cast(syntax: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

fn first_ident_token(syntax: &SyntaxNode) -> Option<SyntaxToken> {
    syntax
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| token.kind() == SyntaxKind::Ident)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Module {
    syntax: SyntaxNode,
}

impl AstNode for Module {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::Module {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl Module {
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> {
        self.syntax.children()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionDef {
    syntax: SyntaxNode,
}

impl AstNode for FunctionDef {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::FunctionDef {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl FunctionDef {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        self.syntax.children().find_map(ParameterList::cast)
    }

    pub fn body(&self) -> Option<Suite> {
        self.syntax.children().find_map(Suite::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassDef {
    syntax: SyntaxNode,
}

impl AstNode for ClassDef {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::ClassDef {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl ClassDef {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    /// Base classes, when the header has a parenthesised list.
    pub fn bases(&self) -> Option<ArgList> {
        self.syntax.children().find_map(ArgList::cast)
    }

    pub fn body(&self) -> Option<Suite> {
        self.syntax.children().find_map(Suite::cast)
    }
}

/// Indented block of a compound statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suite {
    syntax: SyntaxNode,
}

impl AstNode for Suite {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::Suite {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl Suite {
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> {
        self.syntax.children()
    }

    /// Offset of the first statement, skipping any trivia the suite opens with.
    /// An empty suite starts where its node starts.
    pub fn body_start(&self) -> TextSize {
        self.statements()
            .next()
            .map(|statement| statement.text_range().start())
            .unwrap_or_else(|| self.syntax.text_range().start())
    }

    /// Trivia between the compound statement's `:` and the first statement,
    /// comment lines included.
    pub fn leading_whitespace(&self) -> String {
        match self.statements().next() {
            Some(first) => helpers::leading_whitespace(&first),
            None => helpers::leading_whitespace(&self.syntax),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterList {
    syntax: SyntaxNode,
}

impl AstNode for ParameterList {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::ParameterList {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl ParameterList {
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> {
        self.syntax.children().filter_map(Parameter::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    syntax: SyntaxNode,
}

impl AstNode for Parameter {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::Parameter {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl Parameter {
    /// The parameter's own name, after any `*`/`**` prefix.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn annotation(&self) -> Option<SyntaxNode> {
        self.syntax.children().find(|child| child.kind() == SyntaxKind::TypeAnnotation)
    }

    /// Default value expression following `=`.
    pub fn default_value(&self) -> Option<SyntaxNode> {
        let mut after_equal = false;
        for element in self.syntax.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Token(token) if token.kind() == SyntaxKind::Equal => after_equal = true,
                rowan::NodeOrToken::Node(node) if after_equal => return Some(node),
                _ => {},
            }
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameExpr {
    syntax: SyntaxNode,
}

impl AstNode for NameExpr {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::NameExpr {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl NameExpr {
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstantExpr {
    syntax: SyntaxNode,
}

impl AstNode for ConstantExpr {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::ConstantExpr {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallExpr {
    syntax: SyntaxNode,
}

impl AstNode for CallExpr {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::CallExpr {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl CallExpr {
    pub fn callee(&self) -> Option<SyntaxNode> {
        self.syntax.first_child()
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        self.syntax.children().find_map(ArgList::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgList {
    syntax: SyntaxNode,
}

impl AstNode for ArgList {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::ArgList {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = SyntaxNode> {
        self.syntax.children()
    }
}

/// Attribute access `target.name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberExpr {
    syntax: SyntaxNode,
}

impl AstNode for MemberExpr {
    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if syntax.kind() == SyntaxKind::MemberExpr {
            Some(Self { syntax })
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }
}

impl MemberExpr {
    pub fn target(&self) -> Option<SyntaxNode> {
        self.syntax.first_child()
    }

    /// The attribute identifier. Only direct tokens are considered, so the
    /// identifiers of the target expression never match.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        first_ident_token(&self.syntax)
    }

    pub fn name(&self) -> Option<String> {
        self.name_token().map(|token| token.text().to_string())
    }

    /// Offset where the attribute name begins. For an incomplete access
    /// such as `obj.` this is the end of the node.
    pub fn name_header(&self) -> TextSize {
        self.name_token()
            .map(|token| token.text_range().start())
            .unwrap_or_else(|| self.syntax.text_range().end())
    }
}
