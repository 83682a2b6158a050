use std::fmt;

/// Error codes for every diagnostic the toolchain emits.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E2xxx: static binding checks
/// - E6xxx: runtime
/// - E9xxx: internal faults
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Integer literal out of range
    E0002,
    /// Source too large to address with 32-bit offsets
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Trailing input after the program
    E1005,

    // Binding Errors (E2xxx)
    /// Name bound twice by one lambda or letrec
    E2001,

    // Runtime Errors (E6xxx)
    /// Unbound variable
    E6001,
    /// Operand or condition of the wrong kind
    E6002,
    /// Call of a non-closure
    E6003,
    /// Wrong argument count for a closure
    E6004,
    /// Wrong argument count for an intrinsic
    E6005,
    /// Division by zero
    E6006,
    /// Remainder by zero
    E6007,
    /// Integer overflow
    E6008,
    /// Program invoked `error`
    E6009,
    /// Call depth limit exceeded
    E6010,
    /// Input/output failure
    E6011,

    // Internal Errors (E9xxx)
    /// Store lookup miss or other runtime invariant violation
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E9001 => "E9001",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
