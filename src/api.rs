//! HTTP adapter for the USSD aggregator
//!
//! Maps wire JSON to `SessionInput` and `SessionOutput` back to wire JSON.
//! The session responder itself never sees a transport type.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;
