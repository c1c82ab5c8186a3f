use expect_test::expect;

use super::*;
use crate::fixtures::{self, Py, offset_of};
use crate::syntax::ast::{AstNode, CallExpr, ClassDef, FunctionDef, MemberExpr, Module, Parameter};
use crate::syntax::kind::SyntaxKind;

fn first_of<N: AstNode>(tree: &SyntaxTree) -> N {
    tree.root().descendants().find_map(N::cast).expect("node of requested kind")
}

#[test]
fn builder_produces_lossless_tree() {
    let tree = fixtures::call_tree();
    assert_eq!(tree.source(), "foo(bar)\n");
    expect![[r#"
        Module@0..9
          ExprStmt@0..8
            CallExpr@0..8
              NameExpr@0..3
                Ident@0..3 "foo"
              ArgList@3..8
                LParen@3..4 "("
                NameExpr@4..7
                  Ident@4..7 "bar"
                RParen@7..8 ")"
          Newline@8..9 "\n"
    "#]]
    .assert_eq(&format!("{tree:?}"));
}

#[test]
fn dotted_path_nests_to_the_left() {
    let tree = fixtures::member_chain_tree();
    assert_eq!(tree.source(), "a.b.c\n");
    let outer = first_of::<MemberExpr>(&tree);
    assert_eq!(outer.syntax().text().to_string(), "a.b.c");
    assert_eq!(outer.name().as_deref(), Some("c"));
    assert_eq!(outer.name_header(), TextSize::from(4));

    let inner = MemberExpr::cast(outer.target().unwrap()).unwrap();
    assert_eq!(inner.syntax().text().to_string(), "a.b");
    assert_eq!(inner.name().as_deref(), Some("b"));
    assert_eq!(inner.target().unwrap().kind(), SyntaxKind::NameExpr);
}

#[test]
fn incomplete_member_has_header_at_end() {
    let tree = Py::module(|py| {
        py.stmt(|py| {
            py.node(SyntaxKind::MemberExpr, |py| {
                py.name("obj");
                py.tok(SyntaxKind::Dot, ".");
            })
        })
    });
    let member = first_of::<MemberExpr>(&tree);
    assert_eq!(member.name(), None);
    assert_eq!(member.name_header(), TextSize::from(4));
}

#[test]
fn function_parts() {
    let tree = fixtures::function_tree();
    assert_eq!(tree.source(), "def f(x: int = 1):\n    return foo(bar)\n");

    let function = first_of::<FunctionDef>(&tree);
    assert_eq!(function.name_token().unwrap().text(), "f");

    let params: Vec<Parameter> = function.parameter_list().unwrap().parameters().collect();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name_token().unwrap().text(), "x");
    assert_eq!(params[0].annotation().unwrap().text().to_string(), "int");
    assert_eq!(params[0].default_value().unwrap().text().to_string(), "1");

    let body = function.body().unwrap();
    assert_eq!(body.body_start(), offset_of(tree.source(), "return", 0, 0));
    assert_eq!(body.leading_whitespace(), "\n    ");
    assert_eq!(body.statements().count(), 1);
}

#[test]
fn call_parts() {
    let tree = fixtures::call_tree();
    let call = first_of::<CallExpr>(&tree);
    assert_eq!(call.callee().unwrap().text().to_string(), "foo");
    let args: Vec<String> = call.arg_list().unwrap().args().map(|arg| arg.text().to_string()).collect();
    assert_eq!(args, vec!["bar"]);
}

#[test]
fn class_parts() {
    let tree = fixtures::class_tree();
    assert_eq!(tree.source(), "class Point(Base):\n    x = 1\n");
    let class = first_of::<ClassDef>(&tree);
    assert_eq!(class.name_token().unwrap().text(), "Point");
    assert_eq!(class.bases().unwrap().args().count(), 1);
    assert_eq!(class.body().unwrap().leading_whitespace(), "\n    ");

    let module = Module::cast(tree.root()).unwrap();
    assert_eq!(module.statements().count(), 1);
}

#[test]
fn leading_whitespace_includes_comments() {
    let tree = Py::module(|py| {
        py.function(
            "f",
            |_| {},
            "",
            |py| {
                py.ws("  ");
                py.tok(SyntaxKind::Comment, "# note");
                py.ws("\n    ");
                py.node(SyntaxKind::PassStmt, |py| py.tok(SyntaxKind::KwPass, "pass"));
            },
        );
    });
    let body = first_of::<FunctionDef>(&tree).body().unwrap();
    assert_eq!(body.leading_whitespace(), "  # note\n    ");
    assert_eq!(helpers::leading_whitespace(body.syntax()), "");
}

#[test]
fn trivia_splits_line_breaks() {
    let mut builder = SyntaxTreeBuilder::new();
    builder.start_node(SyntaxKind::Module).trivia("  \r\n\t\n").finish_node();
    let tree = builder.finish();
    let kinds: Vec<SyntaxKind> =
        tree.root().children_with_tokens().filter_map(|element| element.into_token()).map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::Whitespace, SyntaxKind::Newline, SyntaxKind::Whitespace, SyntaxKind::Newline]
    );
}

#[test]
fn word_classifies_keywords() {
    let mut builder = SyntaxTreeBuilder::default();
    builder.start_node(SyntaxKind::Module).word("None").trivia(" ").word("value").finish_node();
    let tree = builder.finish();
    let kinds: Vec<SyntaxKind> =
        tree.root().children_with_tokens().filter_map(|element| element.into_token()).map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::KwNone, SyntaxKind::Whitespace, SyntaxKind::Ident]);
    assert!(SyntaxKind::KwNone.is_keyword());
    assert!(!SyntaxKind::Ident.is_keyword());
    assert!(SyntaxKind::Comment.is_trivia());
    assert!(SyntaxKind::Module.is_node());
}

#[test]
fn offsets_positions_and_text() {
    let tree = fixtures::function_tree();
    let bar = offset_of(tree.source(), "bar", 0, 0);
    let position = tree.position_at(bar);
    assert_eq!(position, Position::new(1, 15));
    assert_eq!(tree.offset_at(position).unwrap(), bar);

    let range = TextRange::at(bar, TextSize::from(3));
    assert_eq!(tree.text_of(range), Some("bar"));
    assert_eq!(tree.span_of(range), Range::new(Position::new(1, 15), Position::new(1, 18)));
    assert_eq!(tree.text_of(TextRange::at(TextSize::from(500), TextSize::from(1))), None);
    assert_eq!(tree.line_index().line_count(), 3);
}

#[test]
fn raw_kinds_round_trip() {
    use rowan::Language;

    use crate::syntax::cst::PythonLanguage;

    for kind in [SyntaxKind::Error, SyntaxKind::Comment, SyntaxKind::KwNot, SyntaxKind::LAST] {
        assert_eq!(PythonLanguage::kind_from_raw(PythonLanguage::kind_to_raw(kind)), kind);
    }
}

#[test]
#[should_panic(expected = "outside the Python kind table")]
fn raw_kind_past_last_panics() {
    use rowan::Language;

    use crate::syntax::cst::PythonLanguage;

    PythonLanguage::kind_from_raw(rowan::SyntaxKind(SyntaxKind::LAST as u16 + 1));
}
