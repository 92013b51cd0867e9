//! Property-based tests for the session responder
//!
//! These tests verify the response table holds across all possible inputs.

use super::catalog::FreebieItem;
use super::responder::Stage;
use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_request_type() -> impl Strategy<Value = RequestType> {
    prop_oneof![
        Just(RequestType::Initiation),
        Just(RequestType::Response),
        "[a-zA-Z]{0,12}".prop_map(|raw| RequestType::parse(&raw)),
    ]
}

fn arb_message() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1".to_string()),
        Just("2".to_string()),
        Just("3".to_string()),
        "[0-9]{0,3}",
        ".{0,10}",
    ]
}

fn arb_input() -> impl Strategy<Value = SessionInput> {
    (
        arb_request_type(),
        proptest::option::of(-2i64..8),
        arb_message(),
        proptest::option::of("[a-z]{0,10}"),
    )
        .prop_map(|(request_type, sequence, message, client_state)| SessionInput {
            request_type,
            sequence,
            message,
            client_state,
        })
}

fn arb_item() -> impl Strategy<Value = FreebieItem> {
    prop_oneof![
        Just(FreebieItem::Food),
        Just(FreebieItem::Drink),
        Just(FreebieItem::Airtime),
    ]
}

fn arb_invalid_key() -> impl Strategy<Value = String> {
    ".{0,6}".prop_filter("must not be a menu key", |key| {
        FreebieItem::from_key(key).is_none()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_release_carries_no_state(input in arb_input()) {
        let out = respond(Some(&input));
        prop_assert!(!out.message().is_empty());
        if out.is_release() {
            prop_assert_eq!(out.client_state(), None);
        }
    }

    // The only continuing edges are initiation and a valid item choice
    #[test]
    fn prop_only_two_continuing_edges(input in arb_input()) {
        let out = respond(Some(&input));
        if !out.is_release() {
            let stage = Stage::infer(&input);
            prop_assert!(
                stage == Stage::Start
                    || (stage == Stage::AwaitingItemChoice
                        && FreebieItem::from_key(&input.message).is_some()),
                "unexpected continuation from {:?}",
                stage
            );
        }
    }

    // Same input, same output
    #[test]
    fn prop_deterministic(input in arb_input()) {
        prop_assert_eq!(respond(Some(&input)), respond(Some(&input)));
    }

    #[test]
    fn prop_initiation_shows_all_options(
        message in ".{0,12}",
        sequence in proptest::option::of(any::<i64>()),
        client_state in proptest::option::of(".{0,8}"),
    ) {
        let input = SessionInput {
            request_type: RequestType::Initiation,
            sequence,
            message,
            client_state,
        };
        let out = respond(Some(&input));
        prop_assert_eq!(out.response_type(), ResponseType::Response);
        for label in ["1. Free Food", "2. Free Drink", "3. Free Airtime"] {
            prop_assert!(out.message().contains(label));
        }
    }

    #[test]
    fn prop_valid_choice_asks_confirmation(
        item in arb_item(),
        client_state in proptest::option::of("[a-z]{0,8}"),
    ) {
        let mut input = SessionInput::reply(2, item.key());
        input.client_state = client_state;
        let out = respond(Some(&input));
        prop_assert_eq!(out.response_type(), ResponseType::Response);
        prop_assert_eq!(out.client_state(), Some(item.name()));
        let expected = format!("Are you sure you want free {}?", item.name());
        prop_assert!(out.message().starts_with(&expected));
        prop_assert!(out.message().ends_with("1. Yes\n2. No"));
    }

    #[test]
    fn prop_invalid_choice_releases(key in arb_invalid_key()) {
        let out = respond(Some(&SessionInput::reply(2, key)));
        prop_assert_eq!(out, SessionOutput::release("Invalid option."));
    }

    #[test]
    fn prop_confirmation_echoes_state(item in ".{0,16}") {
        let input = SessionInput::reply(3, "1").with_client_state(item.clone());
        let out = respond(Some(&input));
        let expected = format!("Thank you. You will receive your free {item} shortly.");
        prop_assert_eq!(out.message(), expected.as_str());
        prop_assert_eq!(out.response_type(), ResponseType::Release);
    }

    // Sequence 3 always terminates, whatever was typed
    #[test]
    fn prop_confirmation_step_always_releases(
        answer in arb_message(),
        client_state in proptest::option::of("[a-z]{0,8}"),
    ) {
        let mut input = SessionInput::reply(3, answer);
        input.client_state = client_state;
        prop_assert!(respond(Some(&input)).is_release());
    }

    #[test]
    fn prop_unknown_sequence_releases(
        sequence in any::<i64>().prop_filter("not a known step", |s| *s != 2 && *s != 3),
        message in arb_message(),
    ) {
        let out = respond(Some(&SessionInput::reply(sequence, message)));
        prop_assert_eq!(out, SessionOutput::release("Unexpected request."));
    }

    #[test]
    fn prop_unknown_type_releases(raw in "[a-z]{0,12}", input in arb_input()) {
        // lowercase never matches the exact-case wire values
        let input = SessionInput {
            request_type: RequestType::parse(&raw),
            ..input
        };
        prop_assert_eq!(respond(Some(&input)), SessionOutput::release("Duh."));
    }
}
