//! Session input and output types

use serde::Serialize;

/// Kind of inbound turn, as tagged by the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestType {
    /// First contact: the user just dialed the service code
    Initiation,
    /// Reply to a screen we sent earlier
    Response,
    /// Anything else the aggregator may send (kept for logging)
    Other(String),
}

impl RequestType {
    /// Parse the wire `Type` value. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Self {
        match value {
            "Initiation" => RequestType::Initiation,
            "Response" => RequestType::Response,
            other => RequestType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequestType::Initiation => "Initiation",
            RequestType::Response => "Response",
            RequestType::Other(raw) => raw,
        }
    }
}

/// One inbound turn, decoded from the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInput {
    pub request_type: RequestType,
    /// Step being replied to; only meaningful for `RequestType::Response`
    pub sequence: Option<i64>,
    /// Dial code on initiation, otherwise whatever the user typed
    pub message: String,
    /// Opaque value we emitted on the previous turn, echoed back unchanged
    pub client_state: Option<String>,
}

#[allow(dead_code)] // Fixture constructors for tests
impl SessionInput {
    pub fn initiation(message: impl Into<String>) -> Self {
        Self {
            request_type: RequestType::Initiation,
            sequence: None,
            message: message.into(),
            client_state: None,
        }
    }

    pub fn reply(sequence: i64, message: impl Into<String>) -> Self {
        Self {
            request_type: RequestType::Response,
            sequence: Some(sequence),
            message: message.into(),
            client_state: None,
        }
    }

    #[must_use]
    pub fn with_client_state(mut self, state: impl Into<String>) -> Self {
        self.client_state = Some(state.into());
        self
    }
}

/// Whether the session continues after this screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseType {
    /// Show the message and wait for another reply
    Response,
    /// Show the message and end the session
    Release,
}

impl ResponseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Response => "Response",
            ResponseType::Release => "Release",
        }
    }
}

/// The next screen of a session.
///
/// Only constructible through [`SessionOutput::prompt`],
/// [`SessionOutput::prompt_with_state`] and [`SessionOutput::release`], so a
/// released session can never carry a client state nobody will read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutput {
    message: String,
    response_type: ResponseType,
    client_state: Option<String>,
}

impl SessionOutput {
    /// Continue the session without remembering anything
    pub fn prompt(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response_type: ResponseType::Response,
            client_state: None,
        }
    }

    /// Continue the session and have the caller echo `state` on the next turn
    pub fn prompt_with_state(message: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response_type: ResponseType::Response,
            client_state: Some(state.into()),
        }
    }

    /// End the session after showing `message`
    pub fn release(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response_type: ResponseType::Release,
            client_state: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn response_type(&self) -> ResponseType {
        self.response_type
    }

    pub fn client_state(&self) -> Option<&str> {
        self.client_state.as_deref()
    }

    pub fn is_release(&self) -> bool {
        self.response_type == ResponseType::Release
    }

    /// Split into owned parts for serialization
    pub fn into_parts(self) -> (String, ResponseType, Option<String>) {
        (self.message, self.response_type, self.client_state)
    }
}
