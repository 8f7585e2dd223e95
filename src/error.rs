use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Web-API response was success=false.")]
    RemoteRejected,
    #[error("Web-API response field `{field}` contained {actual} instead of {expected} random numbers.")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: i64,
    },
    #[error("received {actual} random keys instead of {expected}")]
    InvalidInput { expected: usize, actual: usize },
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("selected numbers {0:?} are not six distinct numbers in 1..=49")]
    InvalidDraw([u8; 6]),
    #[error("draw task ended without a result")]
    Aborted,
}

impl DrawError {
    /// Text shown on the display element when a draw fails.
    pub fn user_message(&self) -> String {
        match self {
            DrawError::Transport(_) => format!("Error during HTTP request: {}", self),
            DrawError::RemoteRejected
            | DrawError::LengthMismatch { .. }
            | DrawError::Decode(_) => {
                format!("Error during parsing response from Web API: {}", self)
            }
            DrawError::InvalidInput { .. } | DrawError::InvalidDraw(_) | DrawError::Aborted => {
                format!("Error during selection of numbers: {}", self)
            }
        }
    }
}

impl From<reqwest::Error> for DrawError {
    fn from(err: reqwest::Error) -> Self {
        DrawError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for DrawError {
    fn from(err: serde_json::Error) -> Self {
        DrawError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_is_prefixed() {
        let err = DrawError::Transport("503 Service Unavailable".to_string());
        assert_eq!(
            err.user_message(),
            "Error during HTTP request: HTTP error: 503 Service Unavailable"
        );
    }

    #[test]
    fn rejected_message_is_prefixed() {
        assert_eq!(
            DrawError::RemoteRejected.user_message(),
            "Error during parsing response from Web API: Web-API response was success=false."
        );
    }

    #[test]
    fn invalid_draw_names_the_picks() {
        let err = DrawError::InvalidDraw([1, 1, 2, 3, 4, 50]);
        assert_eq!(
            err.user_message(),
            "Error during selection of numbers: selected numbers [1, 1, 2, 3, 4, 50] \
             are not six distinct numbers in 1..=49"
        );
    }

    #[test]
    fn length_mismatch_names_the_field() {
        let err = DrawError::LengthMismatch {
            field: "data",
            expected: 49,
            actual: 48,
        };
        assert!(err.user_message().contains("`data` contained 48 instead of 49"));
    }
}
