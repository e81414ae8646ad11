use thiserror::Error;

/// Failure of a call to the remote expense service.
///
/// Every variant displays as a message that can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Encode(String),
    #[error("{0}")]
    InvalidRequest(String),
}

impl GatewayError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Problems with the Add Expense form, caught before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Amount must be a valid non-negative number")]
    InvalidAmount,
    #[error("Please choose a category from the list")]
    UnknownCategory,
}
