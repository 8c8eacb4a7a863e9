use std::fmt;

/// Grid access outside the configured dimensions. Always a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { x: i8, y: i8 },
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "out_of_bounds",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "grid coordinates outside the field",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => write!(f, "{} at ({}, {})", self.message(), x, y),
        }
    }
}

impl std::error::Error for GridError {}
