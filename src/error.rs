use actix_web::http::StatusCode;

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Everything that can go wrong during one fetch cycle. Messages are shown
/// to the user verbatim on the error page.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The URL failed the Markdown suffix check.
    NotMarkdown,
    /// The remote server answered with a non-success status.
    Status(StatusCode),
    /// The request failed below HTTP (DNS, refused connection, TLS).
    Fetch(String),
    /// Conversion panicked or took too long.
    Convert(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotMarkdown => StatusCode::BAD_REQUEST,
            Self::Status(_) | Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::Convert(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NotMarkdown => write!(
                f,
                "The URL does not point to a valid Markdown file. \
                 Please ensure the URL ends with '.md' or '.markdown'."
            ),
            Self::Status(status) => write!(
                f,
                "Error fetching content: HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
            Self::Fetch(message) => write!(f, "Error fetching content: {}", message),
            Self::Convert(message) => write!(f, "Error converting markdown: {}", message),
        }
    }
}

#[test]
fn test_status_message_carries_code_and_reason() {
    let message = Error::Status(StatusCode::NOT_FOUND).to_string();
    assert_eq!(message, "Error fetching content: HTTP 404: Not Found");
}

#[test]
fn test_response_status_mapping() {
    assert_eq!(Error::NotMarkdown.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        Error::Status(StatusCode::NOT_FOUND).status(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        Error::Fetch(String::from("dns error")).status(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        Error::Convert(String::from("panicked")).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
