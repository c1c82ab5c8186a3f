#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Trivia
    Error = 0,
    Whitespace,
    Newline,
    Comment,

    // Identifiers & literals
    Ident,
    Integer,
    Float,
    String,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Dot,
    Semicolon,
    Arrow,
    At,

    // Operators
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    Equal,
    EqualEqual,
    NotEqual,
    Less,
    Greater,

    // Keywords
    KwDef,
    KwClass,
    KwReturn,
    KwPass,
    KwIf,
    KwElse,
    KwFor,
    KwIn,
    KwWhile,
    KwImport,
    KwFrom,
    KwLambda,
    KwNone,
    KwTrue,
    KwFalse,
    KwAnd,
    KwOr,
    KwNot,

    // Nodes
    Module,
    FunctionDef,
    ClassDef,
    Decorator,
    ParameterList,
    Parameter,
    TypeAnnotation,
    Suite,
    ExprStmt,
    AssignStmt,
    ReturnStmt,
    PassStmt,
    IfStmt,
    ForStmt,
    WhileStmt,
    ImportStmt,
    CallExpr,
    ArgList,
    Arg,
    NameExpr,
    MemberExpr,
    ConstantExpr,
    BinaryExpr,
    UnaryExpr,
    ParenExpr,
    ListExpr,
    TupleExpr,
    DictExpr,
    SubscriptExpr,
    LambdaExpr,
}

impl SyntaxKind {
    pub const LAST: SyntaxKind = SyntaxKind::LambdaExpr;

    /// Whitespace and line breaks. Comments are trivia too but are not blank.
    pub fn is_whitespace(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Newline)
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Newline | SyntaxKind::Comment)
    }

    pub fn is_keyword(self) -> bool {
        (SyntaxKind::KwDef as u16..=SyntaxKind::KwNot as u16).contains(&(self as u16))
    }

    pub fn is_node(self) -> bool {
        self as u16 >= SyntaxKind::Module as u16
    }

    /// Resolve a keyword spelling to its token kind.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "def" => SyntaxKind::KwDef,
            "class" => SyntaxKind::KwClass,
            "return" => SyntaxKind::KwReturn,
            "pass" => SyntaxKind::KwPass,
            "if" => SyntaxKind::KwIf,
            "else" => SyntaxKind::KwElse,
            "for" => SyntaxKind::KwFor,
            "in" => SyntaxKind::KwIn,
            "while" => SyntaxKind::KwWhile,
            "import" => SyntaxKind::KwImport,
            "from" => SyntaxKind::KwFrom,
            "lambda" => SyntaxKind::KwLambda,
            "None" => SyntaxKind::KwNone,
            "True" => SyntaxKind::KwTrue,
            "False" => SyntaxKind::KwFalse,
            "and" => SyntaxKind::KwAnd,
            "or" => SyntaxKind::KwOr,
            "not" => SyntaxKind::KwNot,
            _ => return None,
        };
        Some(kind)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}
