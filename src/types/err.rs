/*!
Error types used in the library.

Most of these are programmer errors in a logic definition (an arity mismatch, a
missing decomposition rule) rather than run-of-the-mill runtime conditions: a
well-formed logic and a syntactically valid formula never produce an `ErrorKind`.
Bound-exceeded conditions (timeouts, branch/depth limits) are deliberately *not*
part of this enum --- per the failure-semantics design, they are non-fatal and
are surfaced as a [Status](crate::reports::Status) on a [SolveResult](crate::reports::SolveResult)
instead of as an error.

Names of the error enums --- for the most part --- overlap with the area they
come from, and `err::{self}` is imported so call sites can write `err::ErrorKind`.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error while constructing a formula.
    Arity(ArityError),

    /// An error while parsing a formula string.
    Parse(ParseError),

    /// An error registering (or looking up) a logic definition.
    Registration(RegistrationError),

    /// An error matching a signed formula against a rule.
    Match(MatchError),

    /// A saturated branch still contains an unprocessed compound signed formula:
    /// the logic's rule set failed to decompose some sign/connective combination.
    RuleSetIncomplete { sign: String, symbol: String },

    /// An invariant the engine relies on was violated. This should never happen for
    /// a registered (and hence validated) logic definition; treated as a bug.
    InternalInvariantViolated(String),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Arity(e) => write!(f, "{e}"),
            ErrorKind::Parse(e) => write!(f, "{e}"),
            ErrorKind::Registration(e) => write!(f, "{e}"),
            ErrorKind::Match(e) => write!(f, "{e}"),
            ErrorKind::RuleSetIncomplete { sign, symbol } => write!(
                f,
                "no rule decomposes sign {sign} applied to connective {symbol}"
            ),
            ErrorKind::InternalInvariantViolated(detail) => {
                write!(f, "internal invariant violated: {detail}")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

/// A mismatch between a connective's declared arity and the subformulas supplied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArityError {
    pub symbol: String,
    pub expected: usize,
    pub found: usize,
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "connective {} expects {} operand(s), found {}",
            self.symbol, self.expected, self.found
        )
    }
}

impl From<ArityError> for ErrorKind {
    fn from(e: ArityError) -> Self {
        ErrorKind::Arity(e)
    }
}

/// Errors during parsing, each carrying the byte offset at which they occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A token was found where it could not be used, e.g. an infix connective at the
    /// start of an expression.
    UnexpectedToken { position: usize, found: String },

    /// A character (or sequence of characters) did not match any known token.
    UnknownSymbol { position: usize, found: String },

    /// A `(` was never matched by a closing `)`.
    UnterminatedParen { position: usize },

    /// The formula parsed successfully, but input remained afterwards.
    TrailingInput { position: usize },

    /// The input string was empty (or all whitespace).
    EmptyInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedToken { position, found } => {
                write!(f, "unexpected token '{found}' at position {position}")
            }
            ParseError::UnknownSymbol { position, found } => {
                write!(f, "unknown symbol '{found}' at position {position}")
            }
            ParseError::UnterminatedParen { position } => {
                write!(f, "unterminated '(' opened at position {position}")
            }
            ParseError::TrailingInput { position } => {
                write!(f, "trailing input starting at position {position}")
            }
            ParseError::EmptyInput => write!(f, "empty input"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors registering or looking up a [LogicDefinition](crate::logic::LogicDefinition).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationError {
    /// No logic is registered under the requested name.
    UnknownLogic(String),

    /// A logic is already registered under this name.
    DuplicateLogic(String),

    /// A requested sign is not in the logic's sign alphabet.
    UnknownSign(String),

    /// A rule's premise sign is not in the logic's declared sign alphabet.
    PremiseSignNotInAlphabet { rule: String, sign: String },

    /// No rule decomposes some sign applied to some declared connective.
    MissingDecomposition { sign: String, symbol: String },

    /// The logic declares no designated signs, making "satisfiable" undefined.
    NoDesignatedSigns,

    /// The logic declares no contradicting sign pairs, making closure impossible.
    NoContradictions,
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationError::UnknownLogic(name) => write!(f, "unknown logic '{name}'"),
            RegistrationError::DuplicateLogic(name) => {
                write!(f, "a logic named '{name}' is already registered")
            }
            RegistrationError::UnknownSign(sign) => write!(f, "unknown sign '{sign}'"),
            RegistrationError::PremiseSignNotInAlphabet { rule, sign } => write!(
                f,
                "rule '{rule}' has premise sign '{sign}' outside the sign alphabet"
            ),
            RegistrationError::MissingDecomposition { sign, symbol } => write!(
                f,
                "no rule decomposes sign {sign} applied to connective {symbol}"
            ),
            RegistrationError::NoDesignatedSigns => {
                write!(f, "the sign system declares no designated signs")
            }
            RegistrationError::NoContradictions => write!(
                f,
                "the sign system declares no contradicting sign pairs; closure would be impossible"
            ),
        }
    }
}

impl From<RegistrationError> for ErrorKind {
    fn from(e: RegistrationError) -> Self {
        ErrorKind::Registration(e)
    }
}

/// Errors from the [rule matcher](crate::matcher).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// The rule's premise sign does not match the signed formula's sign.
    SignMismatch,

    /// The rule's premise shape does not match the formula's connective (or
    /// atom/compound kind).
    ShapeMismatch,

    /// The same metavariable was bound to two different subformulas.
    InconsistentBinding { metavariable: String },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::SignMismatch => write!(f, "premise sign does not match"),
            MatchError::ShapeMismatch => write!(f, "premise shape does not match"),
            MatchError::InconsistentBinding { metavariable } => write!(
                f,
                "metavariable {metavariable} bound to inconsistent subformulas"
            ),
        }
    }
}

impl From<MatchError> for ErrorKind {
    fn from(e: MatchError) -> Self {
        ErrorKind::Match(e)
    }
}
