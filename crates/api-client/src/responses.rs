use core_types::Id;
use serde::Deserialize;

/// The body of every successful create, update or delete.
/// `id` is only present on creates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WriteResponse {
    pub message: String,
    #[serde(default)]
    pub id: Option<Id>,
}

/// Represents an error response from the Deportes API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    pub message: String,
    #[serde(default)]
    pub errores: Vec<String>,
}
