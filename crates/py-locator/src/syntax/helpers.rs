use crate::syntax::cst::{SyntaxNode, SyntaxToken};

/// Trivia directly preceding `node`'s first token: blanks, line breaks and
/// comments, up to the previous real token.
pub fn leading_whitespace(node: &SyntaxNode) -> String {
    let mut run: Vec<SyntaxToken> = Vec::new();
    let mut current = node.first_token().and_then(|token| token.prev_token());
    while let Some(token) = current {
        if !token.kind().is_trivia() {
            break;
        }
        current = token.prev_token();
        run.push(token);
    }
    run.iter().rev().map(|token| token.text()).collect()
}
