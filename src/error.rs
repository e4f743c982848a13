use thiserror::Error;

/// Failure talking to the catalog API.
///
/// `request` reads like `"DELETE /api/items/4"`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{request} failed: {message}")]
    Transport { request: String, message: String },

    #[error("{request} returned HTTP {status}")]
    Status { request: String, status: u16 },

    #[error("Could not decode response of {request}: {message}")]
    Decode { request: String, message: String },

    #[error("Could not read staged file {name}: {message}")]
    FileRead { name: String, message: String },
}

/// Client-side check that blocks an action before any request is sent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add at least one photo.")]
    NoPhotos,

    #[error("The item is already being saved.")]
    AlreadySubmitting,

    #[error("Tag name cannot be empty.")]
    EmptyTagName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_request() {
        let err = ApiError::Status {
            request: "DELETE /api/tags/9".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "DELETE /api/tags/9 returned HTTP 404");
    }
}
