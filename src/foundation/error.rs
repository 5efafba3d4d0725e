pub type GeomResult<T> = Result<T, GeomError>;

#[derive(thiserror::Error, Debug)]
pub enum GeomError {
    #[error("disconnected tree: the two nodes belong to different documents")]
    DisconnectedTree,

    #[error("malformed transform '{value}': {reason}")]
    MalformedTransform { value: String, reason: String },

    #[error("missing transform: no candidate property produced a value")]
    MissingTransform,

    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GeomError {
    pub fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTransform {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_node(id: impl Into<String>) -> Self {
        Self::UnknownNode(id.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
