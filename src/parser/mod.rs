/*!
A precedence-climbing ("Pratt") parser, generated from the active logic's
[connective table](crate::structures::connective::ConnectiveTable).

The parser knows nothing about signs or semantics: it consumes a token stream
produced from the table's declared symbols and builds a [Formula] by interning
through a [FormulaArena]. Unary prefix connectives bind tighter than any infix
connective of strictly lower declared precedence, matching the grammar in the
external-interfaces section of the specification.
*/

mod token;

use crate::structures::connective::{Associativity, ConnectiveTable, Fixity};
use crate::structures::formula::{Formula, FormulaArena};
use crate::types::err::ParseError;

use token::{tokenize, Token, TokenKind};

/// Parses `input` as a formula over `connectives`, interning subterms into `arena`.
pub fn parse(
    input: &str,
    connectives: &ConnectiveTable,
    arena: &mut FormulaArena,
) -> Result<Formula, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tokens = tokenize(input, connectives)?;
    let mut cursor = Cursor { tokens: &tokens, pos: 0 };

    let formula = parse_expression(&mut cursor, connectives, arena, 0)?;

    match cursor.peek() {
        None => Ok(formula),
        Some(token) => Err(ParseError::TrailingInput {
            position: token.position,
        }),
    }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn end_position(&self) -> usize {
        self.tokens.last().map(|t| t.position + 1).unwrap_or(0)
    }
}

/// Parses an expression whose outermost infix connective has precedence `>= min_precedence`.
fn parse_expression(
    cursor: &mut Cursor,
    connectives: &ConnectiveTable,
    arena: &mut FormulaArena,
    min_precedence: u8,
) -> Result<Formula, ParseError> {
    let mut lhs = parse_primary(cursor, connectives, arena)?;

    loop {
        let Some(Token { kind: TokenKind::Symbol(symbol), .. }) = cursor.peek() else {
            break;
        };

        let Some(spec) = connectives.get(symbol) else {
            break;
        };

        if spec.fixity != Fixity::Infix || spec.precedence < min_precedence {
            break;
        }

        let symbol = symbol.clone();
        let precedence = spec.precedence;
        let associativity = spec.associativity;
        cursor.advance();

        let next_min = match associativity {
            Associativity::Left => precedence + 1,
            Associativity::Right | Associativity::None => precedence,
        };

        let rhs = parse_expression(cursor, connectives, arena, next_min)?;
        lhs = arena
            .compound(&symbol, vec![lhs, rhs])
            .expect("infix connective always has arity 2");
    }

    Ok(lhs)
}

fn parse_primary(
    cursor: &mut Cursor,
    connectives: &ConnectiveTable,
    arena: &mut FormulaArena,
) -> Result<Formula, ParseError> {
    let Some(token) = cursor.advance() else {
        return Err(ParseError::UnexpectedToken {
            position: cursor.end_position(),
            found: "<end of input>".to_string(),
        });
    };

    match &token.kind {
        TokenKind::Atom(name) => Ok(arena.atom(name)),

        TokenKind::LParen => {
            let inner = parse_expression(cursor, connectives, arena, 0)?;
            match cursor.advance() {
                Some(Token { kind: TokenKind::RParen, .. }) => Ok(inner),
                _ => Err(ParseError::UnterminatedParen {
                    position: token.position,
                }),
            }
        }

        TokenKind::Symbol(symbol) => {
            let spec = connectives.get(symbol).cloned();
            match spec {
                Some(spec) if spec.fixity == Fixity::Prefix => {
                    let operand = parse_expression(cursor, connectives, arena, spec.precedence)?;
                    Ok(arena
                        .compound(symbol, vec![operand])
                        .expect("prefix connective always has arity 1"))
                }
                _ => Err(ParseError::UnexpectedToken {
                    position: token.position,
                    found: symbol.clone(),
                }),
            }
        }

        TokenKind::RParen => Err(ParseError::UnexpectedToken {
            position: token.position,
            found: ")".to_string(),
        }),
    }
}
