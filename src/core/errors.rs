use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

// Error type alias used throughout the crate.
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Parse Error
--------------------------------------------------------------------------------------*/

/// The kind of literal that failed to parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    Address,
    Cidr,
}

/// A literal string is not a syntactically valid IP address or CIDR block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    value: String,
}

impl ParseError {
    pub(crate) fn address(value: &str) -> Self {
        Self {
            kind: ParseErrorKind::Address,
            value: value.to_string(),
        }
    }

    pub(crate) fn cidr(value: &str) -> Self {
        Self {
            kind: ParseErrorKind::Cidr,
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The literal that failed to parse.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Address => write!(f, "Invalid IP address: {:?}", self.value),
            ParseErrorKind::Cidr => write!(f, "Invalid CIDR block: {:?}", self.value),
        }
    }
}

impl std::error::Error for ParseError {}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
