//! USSD session responder
//!
//! A pure function from one aggregator turn to the next screen. Nothing is
//! stored between calls: the current step is inferred from `(Type, Sequence)`
//! and the only carried payload travels in the echoed `ClientState`.

pub mod catalog;
mod responder;
pub mod types;

#[cfg(test)]
mod proptests;

pub use responder::respond;
pub use types::{RequestType, ResponseType, SessionInput, SessionOutput};
