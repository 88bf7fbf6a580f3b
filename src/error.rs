/// Abel address kinds of error.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    MalformedInput,
    InvalidHexEncoding,
    ChecksumMismatch,
    UnknownNetwork,
    Other,
}


/// Shortcut for converting boolean check into error.
#[macro_export]
macro_rules! validate {
    ($check:expr, $kind:ident) => (
        if $check {
            Ok::<(), $crate::error::Error>(())
        } else {
            Err($crate::error::ErrorKind::$kind.into())
        }
    );
    ($check:expr, $kind:ident, $($arg:tt)+) => (
        if $check {
            Ok::<(), $crate::error::Error>(())
        } else {
            Err($crate::error::Error::new(
                $crate::error::ErrorKind::$kind, format!($($arg)+)
            ))
        }
    );
}


/// Result to manage address errors.
pub type AbelResult<T> = Result<T, Error>;


/// Address error structure. It supports converting into `std::io::Error`.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}


impl Error {
    /// Create a new error instance.
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    /// Get kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind.clone()
    }

    /// Get the message of the error.
    pub fn message(&self) -> &str {
        &self.message
    }
}


impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}


impl std::error::Error for Error {}


impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        let message = format!("{:?}", kind);
        Error::new(kind, message)
    }
}


impl From<hex::FromHexError> for Error {
    fn from(hex_error: hex::FromHexError) -> Error {
        Error::new(ErrorKind::InvalidHexEncoding, hex_error.to_string())
    }
}


impl From<Error> for std::io::Error {
    fn from(error: Error) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
    }
}


impl From<ErrorKind> for std::io::Error {
    fn from(kind: ErrorKind) -> std::io::Error {
        let error = Error::from(kind);
        error.into()
    }
}
