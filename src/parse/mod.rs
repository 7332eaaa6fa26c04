mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{lex, Spanned, TokenKind};

use crate::schema::Schema;

/// Parses schema source text into descriptors, in declaration order.
pub fn parse(source: &str) -> Result<Schema, Vec<ParseError>> {
    parser::Parser::new(source, lex(source)).schema()
}
