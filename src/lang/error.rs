use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// Attaches a 1-indexed source line. An error that already
    /// knows its line keeps it.
    pub fn in_line_number(&self, line: usize) -> Error {
        Error {
            code: self.code,
            line_number: self.line_number.or(Some(line)),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NoBegin = 1,
    MissingOperand = 2,
    BadAddress = 3,
    DuplicateDefinition = 4,
    UndefinedProcedure = 5,
    DuplicateProcedure = 6,
    EndprocWithoutProc = 7,
    TypeMismatch = 8,
    Overflow = 9,
    FlagOutOfRange = 10,
    UndefinedLine = 11,
    OutOfMemory = 12,
    LineBufferOverflow = 13,
    Break = 14,
    FileNotFound = 53,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            NoBegin => "NO BEGIN",
            MissingOperand => "MISSING OPERAND",
            BadAddress => "BAD ADDRESS",
            DuplicateDefinition => "DUPLICATE DEFINITION",
            UndefinedProcedure => "UNDEFINED PROCEDURE",
            DuplicateProcedure => "DUPLICATE PROCEDURE",
            EndprocWithoutProc => "ENDPROC WITHOUT PROC",
            TypeMismatch => "TYPE MISMATCH",
            Overflow => "OVERFLOW",
            FlagOutOfRange => "FLAG OUT OF RANGE",
            UndefinedLine => "UNDEFINED LINE",
            OutOfMemory => "OUT OF MEMORY",
            LineBufferOverflow => "LINE BUFFER OVERFLOW",
            Break => "BREAK",
            FileNotFound => "FILE NOT FOUND",
            InternalError => "INTERNAL ERROR",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else if self.line_number.is_some() {
            write!(f, "{} IN{}", code_str, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
