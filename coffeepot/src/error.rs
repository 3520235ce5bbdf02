use thiserror::Error;

/// Describes an error encountered while building a script tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A node or method was attached where it is not allowed.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The configured script library is not one we know how to generate for.
    #[error("unknown script library `{0}`")]
    UnknownScriptLibrary(String),

    /// The configured template integration mode is not recognised.
    #[error("unknown template integration mode `{0}`")]
    UnknownTemplateIntegration(String),

    /// The template engine could not load or compile a template.
    #[error("template `{0}` could not be loaded")]
    TemplateNotFound(String),
}

impl GeneratorError {
    pub(crate) fn invalid_operation(message: impl Into<String>) -> Self {
        GeneratorError::InvalidOperation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
