use serde::Serialize;

/// Success envelope shared by every `/api` endpoint.
/// Error responses are produced by `AppError` with `success: false`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            count: None,
            data,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    pub fn list(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            count: Some(data.len()),
            data,
        }
    }
}
