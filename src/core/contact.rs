// Contact form payload, validation and submit state.

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("request timed out")]
    Timeout,
    #[error("relay responded with HTTP {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid e-mail address")]
    InvalidEmail,
}

impl ContactError {
    /// Text shown in the status banner.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Timeout => {
                "The request timed out. Please try again or reach out by e-mail.".to_string()
            }
            ContactError::Status(_) => {
                "Failed to send message. Please try again or reach out by e-mail.".to_string()
            }
            ContactError::Transport(_) => {
                "Error sending message. Please reach out by e-mail instead.".to_string()
            }
            ContactError::MissingField(field) => format!("Please fill in your {}.", field),
            ContactError::InvalidEmail => "Please enter a valid e-mail address.".to_string(),
        }
    }
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    pub fn to_json(&self) -> Result<String, ContactError> {
        serde_json::to_string(self).map_err(|e| ContactError::Transport(e.to_string()))
    }
}

/// HTTP 2xx is success; anything else is reported with its status.
pub fn classify_status(status: u16) -> Result<(), ContactError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Status(status))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
    /// The form was unmounted; late outcomes are discarded.
    Closed,
}

impl SubmitState {
    pub fn can_submit(&self) -> bool {
        !matches!(self, SubmitState::Submitting | SubmitState::Closed)
    }

    /// Enter `Submitting`; refused while a submission is in flight.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    /// Record the outcome. Returns `false` (and changes nothing) once closed.
    pub fn finish(&mut self, result: Result<(), ContactError>) -> bool {
        if *self == SubmitState::Closed {
            return false;
        }
        *self = match result {
            Ok(()) => SubmitState::Sent,
            Err(e) => SubmitState::Failed(e.user_message()),
        };
        true
    }

    pub fn close(&mut self) {
        *self = SubmitState::Closed;
    }

    /// Clear a finished outcome (e.g. when the banner hides).
    pub fn reset(&mut self) {
        if !matches!(self, SubmitState::Submitting | SubmitState::Closed) {
            *self = SubmitState::Idle;
        }
    }

    pub fn banner_text(&self) -> Option<String> {
        match self {
            SubmitState::Idle | SubmitState::Closed => None,
            SubmitState::Submitting => Some("Sending…".to_string()),
            SubmitState::Sent => Some("Message sent! I'll get back to you soon.".to_string()),
            SubmitState::Failed(msg) => Some(msg.clone()),
        }
    }
}
