//! Menu vocabulary for the Freebie service
//!
//! Every key, item name and screen text lives here; the responder only
//! decides which screen comes next.

use std::fmt::Write as _;

/// Sequence numbers are assigned by the aggregator. Initiation is implicitly
/// step 1 and carries no sequence, so the first reply arrives as step 2.
pub const FIRST_RESPONSE_SEQUENCE: i64 = 2;

/// Reply to the welcome menu
pub const ITEM_CHOICE_SEQUENCE: i64 = FIRST_RESPONSE_SEQUENCE;

/// Reply to the yes/no confirmation
pub const CONFIRMATION_SEQUENCE: i64 = FIRST_RESPONSE_SEQUENCE + 1;

const WELCOME_HEADER: &str = "Welcome to Freebie Service.";

/// Something a user can ask for on the welcome menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreebieItem {
    Food,
    Drink,
    Airtime,
}

impl FreebieItem {
    /// All items in menu order
    pub const ALL: [FreebieItem; 3] = [FreebieItem::Food, FreebieItem::Drink, FreebieItem::Airtime];

    /// Resolve a menu key. Keys are compared as text, so `"01"` or `" 1"`
    /// are not valid choices.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            FreebieItem::Food => "1",
            FreebieItem::Drink => "2",
            FreebieItem::Airtime => "3",
        }
    }

    /// Name carried in the client state and shown in prompts
    pub fn name(self) -> &'static str {
        match self {
            FreebieItem::Food => "food",
            FreebieItem::Drink => "drink",
            FreebieItem::Airtime => "airtime",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            FreebieItem::Food => "Free Food",
            FreebieItem::Drink => "Free Drink",
            FreebieItem::Airtime => "Free Airtime",
        }
    }
}

/// Answer to the yes/no confirmation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Confirmation::Yes),
            "2" => Some(Confirmation::No),
            _ => None,
        }
    }
}

/// Screen shown on initiation
pub fn welcome_menu() -> String {
    let mut menu = String::from(WELCOME_HEADER);
    for item in FreebieItem::ALL {
        let _ = write!(menu, "\n{}. {}", item.key(), item.label());
    }
    menu
}

/// Screen asking the user to confirm `item`
pub fn confirmation_prompt(item: FreebieItem) -> String {
    format!("Are you sure you want free {}?\n1. Yes\n2. No", item.name())
}

/// Final screen after a confirmed order. `item` is whatever the caller
/// echoed back, not re-validated against the catalog.
pub fn order_confirmed(item: &str) -> String {
    format!("Thank you. You will receive your free {item} shortly.")
}

pub const ORDER_CANCELLED: &str = "Order cancelled.";
pub const INVALID_REQUEST: &str = "Invalid USSD request.";
pub const UNKNOWN_REQUEST_TYPE: &str = "Duh.";
pub const UNEXPECTED_SEQUENCE: &str = "Unexpected request.";
pub const INVALID_OPTION: &str = "Invalid option.";
pub const INVALID_SELECTION: &str = "Invalid selection.";
