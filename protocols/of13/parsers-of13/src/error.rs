#[derive(Debug, PartialEq)]
pub enum ParserError {
    /// No decoder is registered for this experimenter type.
    UnknownExperimenterType(u32),
    /// The frame's vendor ID is not the namespace its experimenter type belongs to.
    VendorMismatch {
        /// Vendor ID of the decoded type's namespace.
        expected: u32,
        /// Vendor ID carried by the frame.
        actual: u32,
    },
    BinaryError(binary_of13::Error),
    FramingError(framing_of13::Error),
}

impl From<binary_of13::Error> for ParserError {
    fn from(e: binary_of13::Error) -> Self {
        ParserError::BinaryError(e)
    }
}

impl From<framing_of13::Error> for ParserError {
    fn from(e: framing_of13::Error) -> Self {
        ParserError::FramingError(e)
    }
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserError::UnknownExperimenterType(t) => {
                write!(f, "Unknown experimenter type: {t}")
            }
            ParserError::VendorMismatch { expected, actual } => write!(
                f,
                "Vendor mismatch: expected `{expected:#010x}`, frame carries `{actual:#010x}`"
            ),
            ParserError::BinaryError(e) => write!(f, "Binary error: {e}"),
            ParserError::FramingError(e) => write!(f, "Framing error: {e}"),
        }
    }
}

impl std::error::Error for ParserError {}
