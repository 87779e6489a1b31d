use serde::{Deserialize, Serialize};

/// Error body returned by the account and search services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
