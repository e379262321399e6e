use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFault {
    pub code: i32,
    pub message: String,
}

/// Uniform reply wrapper. Two wire shapes exist side by side:
/// `{status, message, data}` and `{error: {code, message}}` — which one an
/// operation produces on failure is part of its contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolReply<T> {
    Envelope {
        status: EnvelopeStatus,
        message: String,
        data: Option<T>,
    },
    Fault {
        error: ToolFault,
    },
}

impl<T> ToolReply<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::Envelope {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Envelope {
            status: EnvelopeStatus::Error,
            message: message.into(),
            data: None,
        }
    }

    pub fn fault(code: i32, message: impl Into<String>) -> Self {
        Self::Fault { error: ToolFault { code, message: message.into() } }
    }
}
