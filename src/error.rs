use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while sizing or indexing behaviour variables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A value that does not name any modelling hypothesis.
    #[error("unsupported modelling hypothesis: {value}")]
    UnsupportedHypothesis { value: String },

    /// A value that does not name any variable type.
    #[error("unsupported variable type: {value}")]
    UnsupportedVariableType { value: String },

    #[error("variable '{name}' not found")]
    VariableNotFound { name: String },

    #[error("variable names must not be empty")]
    EmptyVariableName,

    #[error("variable '{name}' is declared more than once")]
    DuplicateVariable { name: String },

    /// The buffer does not hold a whole number of integration points.
    #[error("buffer of length {buffer_len} is not a multiple of the array size {array_size}")]
    BufferSizeMismatch { buffer_len: usize, array_size: usize },

    #[error("integration point {ip} out of range, buffer holds {n_integration_points}")]
    IntegrationPointOutOfRange {
        ip: usize,
        n_integration_points: usize,
    },
}

impl LayoutError {
    pub(crate) fn not_found(name: &str) -> Self {
        LayoutError::VariableNotFound {
            name: name.to_string(),
        }
    }
}
