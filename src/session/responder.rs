//! Pure session responder
//!
//! Given the same input, `respond` always produces the same output, with no
//! I/O and no state kept between calls. It never fails: every anomalous turn
//! becomes a user-facing message that releases the session.

use super::catalog::{
    self, Confirmation, FreebieItem, CONFIRMATION_SEQUENCE, INVALID_OPTION, INVALID_REQUEST,
    INVALID_SELECTION, ITEM_CHOICE_SEQUENCE, ORDER_CANCELLED, UNEXPECTED_SEQUENCE,
    UNKNOWN_REQUEST_TYPE,
};
use super::{RequestType, SessionInput, SessionOutput};

/// Where a session stands, inferred from `(Type, Sequence)` on every call.
///
/// Start --Initiation--> `AwaitingItemChoice` --valid key--> `AwaitingConfirmation`.
/// Every other edge releases the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// First contact
    Start,
    /// The user is answering the welcome menu
    AwaitingItemChoice,
    /// The user is answering the yes/no screen; the item is in the client state
    AwaitingConfirmation,
    /// A reply to a step this service never asked for
    UnknownStep,
    /// Not a type this service understands
    UnknownType,
}

impl Stage {
    pub fn infer(input: &SessionInput) -> Self {
        match input.request_type {
            RequestType::Initiation => Stage::Start,
            RequestType::Response => match input.sequence {
                Some(ITEM_CHOICE_SEQUENCE) => Stage::AwaitingItemChoice,
                Some(CONFIRMATION_SEQUENCE) => Stage::AwaitingConfirmation,
                _ => Stage::UnknownStep,
            },
            RequestType::Other(_) => Stage::UnknownType,
        }
    }
}

/// Produce the next screen for one turn. `None` stands for a missing or
/// empty request body.
pub fn respond(input: Option<&SessionInput>) -> SessionOutput {
    let Some(input) = input else {
        return SessionOutput::release(INVALID_REQUEST);
    };

    match Stage::infer(input) {
        Stage::Start => SessionOutput::prompt(catalog::welcome_menu()),
        Stage::AwaitingItemChoice => choose_item(&input.message),
        Stage::AwaitingConfirmation => confirm(&input.message, input.client_state.as_deref()),
        Stage::UnknownStep => SessionOutput::release(UNEXPECTED_SEQUENCE),
        Stage::UnknownType => SessionOutput::release(UNKNOWN_REQUEST_TYPE),
    }
}

fn choose_item(key: &str) -> SessionOutput {
    match FreebieItem::from_key(key) {
        Some(item) => {
            SessionOutput::prompt_with_state(catalog::confirmation_prompt(item), item.name())
        }
        None => SessionOutput::release(INVALID_OPTION),
    }
}

// Always releases; the echoed item is trusted as-is.
fn confirm(answer: &str, item: Option<&str>) -> SessionOutput {
    match Confirmation::from_key(answer) {
        Some(Confirmation::Yes) => {
            SessionOutput::release(catalog::order_confirmed(item.unwrap_or_default()))
        }
        Some(Confirmation::No) => SessionOutput::release(ORDER_CANCELLED),
        None => SessionOutput::release(INVALID_SELECTION),
    }
}
