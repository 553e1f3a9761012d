use crate::page::{Landing, Page};
use axum::http::StatusCode;

/// Failure of the front end's own HTTP surface.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failure talking to the backend API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("backend answered {status}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("could not decode backend response ({status}): {source}")]
    Decode {
        status: reqwest::StatusCode,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Status of the completed response, if one arrived.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
        }
    }
}

pub const NETWORK_ALERT: &str = "There was an error sending a request to the server. \
Either there is a problem with your network connection \
or the backend server is experiencing problems.";

/// Why a controller flow was aborted.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("session token rejected")]
    Unauthorized,
    #[error("{0}")]
    Rejected(&'static str),
    #[error("{0}")]
    Invalid(&'static str),
    #[error("backend error {status}")]
    Server {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("backend unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error("could not store session: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// Message to show the user, if any.
    pub fn alert(&self) -> Option<String> {
        match self {
            Self::Unauthorized => None,
            Self::Rejected(message) | Self::Invalid(message) => Some((*message).to_string()),
            Self::Server { status, body } => Some(format!(
                "Sorry, the server send an error response:\n\n{} {}\n\n{}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                body
            )),
            Self::Network(_) => Some(NETWORK_ALERT.to_string()),
            Self::Storage(err) => Some(format!("Could not store your session: {err}")),
        }
    }

    pub fn landing(&self) -> Landing {
        match self {
            Self::Unauthorized => Landing::Page(Page::Login),
            Self::Rejected(_) | Self::Invalid(_) => Landing::Stay,
            Self::Server { .. } | Self::Network(_) | Self::Storage(_) => Landing::Root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_silent_and_goes_to_login() {
        let err = ClientError::Unauthorized;
        assert_eq!(err.alert(), None);
        assert_eq!(err.landing(), Landing::Page(Page::Login));
    }

    #[test]
    fn server_error_alert_carries_status_and_body() {
        let err = ClientError::Server {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(
            err.alert().as_deref(),
            Some("Sorry, the server send an error response:\n\n500 Internal Server Error\n\nboom")
        );
        assert_eq!(err.landing(), Landing::Root);
    }

    #[test]
    fn validation_failures_stay_on_page() {
        let err = ClientError::Invalid("Please fill out the form first");
        assert_eq!(err.alert().as_deref(), Some("Please fill out the form first"));
        assert_eq!(err.landing(), Landing::Stay);
    }
}
