use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// Everything that can go wrong talking to the remote API. Screens only ever
/// show one line of text for it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("{0}")]
    Decode(String),

    #[error("{}", .0.as_deref().unwrap_or("Request rejected by server"))]
    Rejected(Option<String>),

    #[error("Request aborted")]
    Aborted,
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }

    /// Text for a form submitter: the server's own message when it sent one,
    /// the screen's fallback when it refused without one, a generic line for
    /// transport or parse failures.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected(_) => fallback.to_string(),
            ApiError::Status(_) | ApiError::Network(_) | ApiError::Decode(_) => {
                GENERIC_FAILURE.to_string()
            }
            ApiError::Aborted => String::new(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both username and password.")]
    MissingCredentials,

    #[error("Please fill all required fields.")]
    MissingRegistrationFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please accept terms and conditions.")]
    TermsNotAccepted,

    #[error("All fields are required.")]
    MissingPasswordFields,

    #[error("New password and confirm password do not match.")]
    NewPasswordMismatch,

    #[error("User ID missing. Please login again.")]
    MissingUserId,

    #[error("Please fill all required booking fields.")]
    MissingBookingFields,

    #[error("Check-out date cannot be before check-in date.")]
    CheckOutBeforeCheckIn,

    #[error("Mobile number must contain digits only.")]
    InvalidMobile,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,

    #[error("could not read session: {0}")]
    Read(String),

    #[error("could not write session: {0}")]
    Write(String),

    #[error("could not serialize session: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_prefers_server_message() {
        let err = ApiError::Rejected(Some("Invalid username".to_string()));
        assert_eq!(err.user_message("fallback"), "Invalid username");
        assert_eq!(err.to_string(), "Invalid username");
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        assert_eq!(
            ApiError::Rejected(None).user_message("Invalid username or password."),
            "Invalid username or password."
        );
        assert_eq!(
            ApiError::Rejected(Some("   ".to_string())).user_message("fb"),
            "fb"
        );
    }

    #[test]
    fn test_transport_errors_are_generic() {
        assert_eq!(
            ApiError::Network("TypeError: Failed to fetch".to_string()).user_message("fb"),
            GENERIC_FAILURE
        );
        assert_eq!(ApiError::Status(502).user_message("fb"), GENERIC_FAILURE);
        assert_eq!(ApiError::Status(404).to_string(), "HTTP error! Status: 404");
    }

    #[test]
    fn test_aborted() {
        assert!(ApiError::Aborted.is_aborted());
        assert!(ApiError::Aborted.user_message("fb").is_empty());
    }
}
