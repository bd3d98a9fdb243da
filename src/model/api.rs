use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with a request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Severity of a flash notification, mirrors the classes used by the page templates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

/// A one-shot notification shown on the next rendered page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlashDto {
    pub level: FlashLevel,
    pub message: String,
}
