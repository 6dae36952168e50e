//! Collaborator error and identity types.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when talking to AWS.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("AWS request failed: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Caller identity returned by the STS credential check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallerIdentity {
    pub account: String,
    pub user_id: String,
    pub arn: String,
}
