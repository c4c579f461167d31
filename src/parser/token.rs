/*!
Tokenising a formula string against a connective table.

Tokens are atoms (matching `[A-Za-z][A-Za-z0-9_]*`), connective symbols (matched
longest-first against the active [ConnectiveTable]), and parentheses. Whitespace
is skipped between tokens. The tokeniser does not know about precedence or
arity --- it only knows *that* a span of text is a symbol the table declares.
*/

use crate::structures::connective::ConnectiveTable;
use crate::types::err::ParseError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Atom(String),
    Symbol(String),
    LParen,
    RParen,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

pub fn tokenize(input: &str, connectives: &ConnectiveTable) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '(' {
            tokens.push(Token {
                kind: TokenKind::LParen,
                position: i,
            });
            i += 1;
            continue;
        }

        if c == ')' {
            tokens.push(Token {
                kind: TokenKind::RParen,
                position: i,
            });
            i += 1;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Atom(input[start..i].to_string()),
                position: start,
            });
            continue;
        }

        if let Some(symbol) = connectives.longest_matching_symbol(&input[i..]) {
            tokens.push(Token {
                kind: TokenKind::Symbol(symbol.to_string()),
                position: i,
            });
            i += symbol.len();
            continue;
        }

        return Err(ParseError::UnknownSymbol {
            position: i,
            found: c.to_string(),
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classical;

    #[test]
    fn tokenizes_mixed_symbols_and_atoms() {
        let logic = classical::define();
        let tokens = tokenize("p & ~q -> (r | s)", logic.connectives()).unwrap();
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Atom("p".into()),
                TokenKind::Symbol("&".into()),
                TokenKind::Symbol("~".into()),
                TokenKind::Atom("q".into()),
                TokenKind::Symbol("->".into()),
                TokenKind::LParen,
                TokenKind::Atom("r".into()),
                TokenKind::Symbol("|".into()),
                TokenKind::Atom("s".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn unknown_symbol_is_reported_with_position() {
        let logic = classical::define();
        let err = tokenize("p @ q", logic.connectives()).unwrap_err();
        assert_eq!(err, ParseError::UnknownSymbol { position: 2, found: "@".into() });
    }
}
