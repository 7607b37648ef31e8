use std::fmt;

/// What went wrong during a parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input contained no expression at all
    EmptyExpression,
    /// A specific character (or end of input) was required but something
    /// else was found
    Unexpected { expected: String, actual: String },
    /// Prefix grammar: the slot after `(` did not hold a registered operator
    ExpectedOperation { found: String },
    /// Prefix grammar: a registered operator appeared where an operand was
    /// required
    OperationAsOperand { token: String },
    /// Postfix grammar: the operand list ran out without an operator
    MissingOperation,
    /// A fixed-arity operator received the wrong number of operands
    ArityMismatch {
        op: String,
        needed: usize,
        actual: usize,
    },
    /// A bare token that is neither an operator, a declared variable, nor a
    /// number literal
    InvalidToken { token: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::EmptyExpression => write!(f, "empty expression"),
            ParseErrorKind::Unexpected { expected, actual } => {
                write!(f, "expected {}, actual {}", expected, actual)
            }
            ParseErrorKind::ExpectedOperation { found } => {
                write!(f, "expected operation, but found \"{}\"", found)
            }
            ParseErrorKind::OperationAsOperand { token } => {
                write!(f, "\"{}\" cannot be parsed as argument of operation", token)
            }
            ParseErrorKind::MissingOperation => {
                write!(f, "operation expected, but not found")
            }
            ParseErrorKind::ArityMismatch { op, needed, actual } => {
                write!(
                    f,
                    "operation \"{}\" needed {} arguments, actual {} arguments",
                    op, needed, actual
                )
            }
            ParseErrorKind::InvalidToken { token } => {
                write!(
                    f,
                    "token \"{}\" cannot be parsed as a number or variable",
                    token
                )
            }
        }
    }
}

/// Parse failure carrying the zero-based character offset at which the
/// problem was detected.
///
/// All malformed-input conditions funnel into this one type: unmatched
/// parentheses, wrong operand counts, unknown tokens, operators in operand
/// position, empty input, and trailing content after a complete expression.
/// Parsing has no recovery; no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pos: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(pos: usize, kind: ParseErrorKind) -> Self {
        ParseError { pos, kind }
    }

    /// Zero-based character offset at which the problem was detected
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The error kind
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The human-readable message, without the position prefix
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at position {}: {}", self.pos, self.kind)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message_cites_both_counts() {
        let err = ParseError::new(
            8,
            ParseErrorKind::ArityMismatch {
                op: "+".to_string(),
                needed: 2,
                actual: 3,
            },
        );
        let msg = err.message();
        assert!(msg.contains("needed 2"), "message: {}", msg);
        assert!(msg.contains("actual 3"), "message: {}", msg);
        assert_eq!(err.position(), 8);
    }

    #[test]
    fn test_display_includes_position() {
        let err = ParseError::new(0, ParseErrorKind::EmptyExpression);
        assert_eq!(err.message(), "empty expression");
        assert_eq!(err.to_string(), "at position 0: empty expression");
    }
}
