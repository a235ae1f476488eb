use thiserror::Error;

/// Status code returned by an engine call. Zero is success for every
/// supported engine; any other value is engine-specific.
pub type Status = i32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// A call into the transform engine returned a non-success status.
    /// `tag` is the engine's fixed message tag.
    #[error("{tag}: engine call failed (status {status})")]
    Engine { status: Status, tag: &'static str },

    /// The requested configuration is valid for the API but not
    /// implemented by this binding.
    #[error("unsupported configuration: {0}")]
    Unsupported(&'static str),
}

impl FftError {
    pub fn engine(tag: &'static str, status: Status) -> Self {
        Self::Engine { status, tag }
    }

    /// Status carried by an engine error, if this is one.
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Engine { status, .. } => Some(*status),
            Self::Unsupported(_) => None,
        }
    }
}
