use logos::Logos;
use text_size::{TextRange, TextSize};

pub type Spanned = (TokenKind, TextRange);

/// Lexes the whole source, dropping whitespace and comments.
#[must_use]
pub fn lex(source: &str) -> Vec<Spanned> {
    TokenKind::lexer(source)
        .spanned()
        .map(|(kind, span)| (kind, text_range(span)))
        .collect()
}

fn text_range(span: std::ops::Range<usize>) -> TextRange {
    let size = |offset: usize| TextSize::from(u32::try_from(offset).unwrap_or(u32::MAX));
    TextRange::new(size(span.start), size(span.end))
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    #[token("op")]
    Op,
    #[token("opcode")]
    Opcode,
    #[token("results")]
    Results,
    #[token("operand")]
    Operand,
    #[token("attribute")]
    Attribute,
    #[token("manual")]
    Manual,
    #[token("enum")]
    Enum,
    #[token("bitenum")]
    BitEnum,
    #[token("in")]
    In,
    #[token("separator")]
    Separator,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[token("?")]
    Question,
    #[token("...")]
    Ellipsis,

    #[regex(r"0x[0-9a-fA-F]+|[0-9]+")]
    IntLiteral,
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    /// Dashed attribute kind names such as `enum-as-int32`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(-[A-Za-z0-9_]+)+")]
    Kind,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[regex(r"//[^\r\n]*", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        use TokenKind::*;
        match self {
            Op => "`op`",
            Opcode => "`opcode`",
            Results => "`results`",
            Operand => "`operand`",
            Attribute => "`attribute`",
            Manual => "`manual`",
            Enum => "`enum`",
            BitEnum => "`bitenum`",
            In => "`in`",
            Separator => "`separator`",
            LBrace => "`{`",
            RBrace => "`}`",
            Semicolon => "`;`",
            ColonColon => "`::`",
            Colon => "`:`",
            Comma => "`,`",
            Equals => "`=`",
            Question => "`?`",
            Ellipsis => "`...`",
            IntLiteral => "integer",
            StringLiteral => "string",
            Ident => "identifier",
            Kind => "attribute kind",
            Error => "<unknown>",
        }
    }
}
