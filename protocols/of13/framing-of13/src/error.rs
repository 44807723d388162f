use core::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    BinaryError(binary_of13::Error),
    /// The operation does not apply to this kind of value.
    OperationNotSupported(&'static str),
    /// The header announces a message type other than `OFPT_EXPERIMENTER`.
    NotAnExperimenterMessage(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            BinaryError(ref e) => {
                write!(f, "BinaryError: `{}`", e)
            }
            OperationNotSupported(op) => {
                write!(f, "Operation not supported: `{}`", op)
            }
            NotAnExperimenterMessage(t) => {
                write!(f, "Expected an experimenter message, received type `{}`", t)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<binary_of13::Error> for Error {
    fn from(e: binary_of13::Error) -> Self {
        Error::BinaryError(e)
    }
}
