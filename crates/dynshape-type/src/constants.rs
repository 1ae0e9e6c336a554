/// Decode failure codes.
///
/// ATTENTION: Only add new error codes at the end of the list !!!
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// Runtime shape does not match the schema node.
    Shape = 0,
    /// Right broad shape category, wrong scalar kind.
    Type = 1,
    /// Required record field absent from the mapping.
    Key = 2,
}

impl DecodeError {
    pub fn name(self) -> &'static str {
        match self {
            Self::Shape => "SHAPE",
            Self::Type => "TYPE",
            Self::Key => "KEY",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Shape => "Value shape does not match the schema node.",
            Self::Type => "Wrong scalar kind.",
            Self::Key => "Missing required key.",
        }
    }
}
