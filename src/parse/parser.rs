use crate::{
    parse::{ParseError, ParseErrorKind, Spanned, TokenKind},
    schema::{Argument, EnumCase, EnumDescriptor, OperationDescriptor, Schema},
};
use text_size::{TextRange, TextSize};

type ParseResult<T> = Result<T, ParseError>;

/// Recursive descent over the token list. An error abandons the current
/// declaration; parsing resumes at the next `op`, `enum` or `bitenum`.
pub(in crate::parse) struct Parser<'s> {
    source: &'s str,
    tokens: Vec<Spanned>,
    cursor: usize,
    errors: Vec<ParseError>,
}

impl<'s> Parser<'s> {
    pub(in crate::parse) fn new(source: &'s str, tokens: Vec<Spanned>) -> Self {
        Self {
            source,
            tokens,
            cursor: 0,
            errors: Vec::new(),
        }
    }

    pub(in crate::parse) fn schema(mut self) -> Result<Schema, Vec<ParseError>> {
        let mut schema = Schema::default();
        while !self.is_at_end() {
            let result = match self.peek() {
                Some(TokenKind::Op) => self.operation().map(|op| schema.operations.push(op)),
                Some(TokenKind::Enum | TokenKind::BitEnum) => {
                    self.enumeration().map(|desc| schema.enums.push(desc))
                }
                _ => Err(self.unexpected("`op`, `enum` or `bitenum`")),
            };
            if let Err(err) = result {
                self.errors.push(err);
                self.recover();
            }
        }
        if self.errors.is_empty() {
            Ok(schema)
        } else {
            Err(self.errors)
        }
    }

    fn operation(&mut self) -> ParseResult<OperationDescriptor> {
        self.expect(TokenKind::Op, "`op`")?;
        let (name, range) = self.ident()?;
        let mut op = OperationDescriptor::new(name);
        op.range = range;
        op.autogen_serialization = true;
        self.expect(TokenKind::LBrace, "`{`")?;

        let mut seen_results = false;
        while !self.eat(TokenKind::RBrace) {
            let field_range = self.peek_range();
            match self.peek() {
                Some(TokenKind::Opcode) => {
                    self.bump();
                    let (value, range) = self.int()?;
                    if op.opcode.is_some() {
                        return Err(self.duplicate_field(field_range, "opcode", &op.name));
                    }
                    op.opcode = Some(narrow(value, range)?);
                }
                Some(TokenKind::Results) => {
                    self.bump();
                    let (value, range) = self.int()?;
                    if seen_results {
                        return Err(self.duplicate_field(field_range, "results", &op.name));
                    }
                    seen_results = true;
                    op.result_arity = narrow(value, range)?;
                }
                Some(TokenKind::Manual) => {
                    self.bump();
                    op.autogen_serialization = false;
                }
                Some(TokenKind::Operand) => {
                    self.bump();
                    let (name, range) = self.ident()?;
                    let variadic = self.eat(TokenKind::Ellipsis);
                    op.arguments.push(Argument {
                        range,
                        ..Argument::operand(name, variadic)
                    });
                }
                Some(TokenKind::Attribute) => {
                    self.bump();
                    let (name, range) = self.ident()?;
                    self.expect(TokenKind::Colon, "`:`")?;
                    let kind = self.attribute_kind()?;
                    let optional = self.eat(TokenKind::Question);
                    op.arguments.push(Argument {
                        range,
                        ..Argument::attribute(name, kind, optional)
                    });
                }
                _ => {
                    return Err(self.unexpected(
                        "`opcode`, `results`, `manual`, `operand`, `attribute` or `}`",
                    ))
                }
            }
            self.expect(TokenKind::Semicolon, "`;`")?;
        }
        Ok(op)
    }

    fn enumeration(&mut self) -> ParseResult<EnumDescriptor> {
        let is_bit_enum = self.eat(TokenKind::BitEnum);
        if !is_bit_enum {
            self.expect(TokenKind::Enum, "`enum`")?;
        }
        let (name, range) = self.ident()?;
        self.expect(TokenKind::Colon, "`:`")?;
        let (underlying, _) = self.ident()?;
        let mut desc = if is_bit_enum {
            EnumDescriptor::bit_enum(name, underlying)
        } else {
            EnumDescriptor::value_enum(name, underlying)
        };
        desc.range = range;

        if self.eat(TokenKind::In) {
            loop {
                let (segment, _) = self.ident()?;
                desc.namespace_path.push(segment);
                if !self.eat(TokenKind::ColonColon) {
                    break;
                }
            }
        }
        if is_bit_enum && self.eat(TokenKind::Separator) {
            desc.separator = self.string()?;
        }

        self.expect(TokenKind::LBrace, "`{`")?;
        while !self.eat(TokenKind::RBrace) {
            let (symbol, range) = self.ident()?;
            self.expect(TokenKind::Equals, "`=`")?;
            let (value, _) = self.int()?;
            desc.cases.push(EnumCase {
                symbol,
                value,
                range,
            });
            if !self.eat(TokenKind::Comma) {
                self.expect(TokenKind::RBrace, "`,` or `}`")?;
                break;
            }
        }
        Ok(desc)
    }

    fn ident(&mut self) -> ParseResult<(String, TextRange)> {
        let range = self.expect(TokenKind::Ident, "identifier")?;
        Ok((self.text(range).to_string(), range))
    }

    fn attribute_kind(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(TokenKind::Ident | TokenKind::Kind) => {
                let range = self.bump();
                Ok(self.text(range).to_string())
            }
            _ => Err(self.unexpected("attribute kind")),
        }
    }

    fn int(&mut self) -> ParseResult<(u64, TextRange)> {
        let range = self.expect(TokenKind::IntLiteral, "integer")?;
        let text = self.text(range);
        let value = match text.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => text.parse(),
        };
        let value = value.map_err(|_| ParseError {
            range,
            kind: ParseErrorKind::IntegerOverflow,
        })?;
        Ok((value, range))
    }

    fn string(&mut self) -> ParseResult<String> {
        let range = self.expect(TokenKind::StringLiteral, "string")?;
        let text = self.text(range);
        let mut out = String::with_capacity(text.len());
        let mut chars = text[1..text.len() - 1].chars();
        while let Some(ch) = chars.next() {
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(ch @ ('"' | '\\')) => out.push(ch),
                _ => {
                    return Err(ParseError {
                        range,
                        kind: ParseErrorKind::InvalidEscape,
                    })
                }
            }
        }
        Ok(out)
    }

    fn text(&self, range: TextRange) -> &'s str {
        &self.source[range]
    }

    fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.cursor).map(|&(kind, _)| kind)
    }

    fn peek_range(&self) -> TextRange {
        match self.tokens.get(self.cursor) {
            Some(&(_, range)) => range,
            None => TextRange::empty(TextSize::of(self.source)),
        }
    }

    fn bump(&mut self) -> TextRange {
        let range = self.peek_range();
        self.cursor += 1;
        range
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<TextRange> {
        if self.peek() == Some(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        let range = self.peek_range();
        let kind = match self.peek() {
            Some(found) => ParseErrorKind::Expected { expected, found },
            None => ParseErrorKind::UnexpectedEof { expected },
        };
        ParseError { range, kind }
    }

    fn duplicate_field(&self, range: TextRange, field: &'static str, op: &str) -> ParseError {
        ParseError {
            range,
            kind: ParseErrorKind::DuplicateField {
                field,
                op: op.to_string(),
            },
        }
    }

    /// Skips to the start of the next declaration.
    fn recover(&mut self) {
        self.cursor += 1;
        while let Some(kind) = self.peek() {
            if matches!(kind, TokenKind::Op | TokenKind::Enum | TokenKind::BitEnum) {
                break;
            }
            self.cursor += 1;
        }
    }
}

fn narrow(value: u64, range: TextRange) -> ParseResult<u32> {
    u32::try_from(value).map_err(|_| ParseError {
        range,
        kind: ParseErrorKind::IntegerOverflow,
    })
}
