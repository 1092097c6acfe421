//! Property-based tests for the configuration query evaluator.
//!
//! Generates random queries -- both well-formed expressions over a known
//! interop table and arbitrary printable garbage -- and verifies the
//! evaluator's structural guarantees hold.

use proptest::prelude::*;
use shakedown_api::interop::{InteropProvider, InteropStore, InteropValue};
use shakedown_api::query::{QueryTarget, evaluate};

// ===========================================================================
// Target
// ===========================================================================

struct StubPart {
    name: String,
    store: InteropStore,
}

impl StubPart {
    fn engine() -> Self {
        let mut store = InteropStore::new();
        store.add("thrust", InteropValue::float(50.0, "engine"));
        store.add("ignitions", InteropValue::int(3, "engine"));
        store.add("deployed", InteropValue::boolean(true, "chute"));
        store.add("fuel", InteropValue::string("kerosene", "engine"));
        Self {
            name: "liquidengine".to_string(),
            store,
        }
    }
}

impl QueryTarget for StubPart {
    fn part_name(&self) -> &str {
        &self.name
    }
    fn full_name(&self) -> String {
        self.name.clone()
    }
    fn interop(&self, name: &str) -> InteropValue {
        self.store.get_interop(name)
    }
}

// ===========================================================================
// Generators
// ===========================================================================

/// A single block: a bare name, or a `qualifier op term` triple drawn from
/// qualifiers that may or may not resolve and terms that may or may not parse.
fn arb_block() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("liquidengine".to_string()),
        Just("solidbooster".to_string()),
        (
            "(thrust|ignitions|deployed|fuel|missing)",
            "(=|!=|<|>|<=|>=|<>|<=>|~=)",
            "(-?[0-9]{1,3}|[0-9]{1,2}\\.[0-9]|true|false|kerosene|[0-9]{1,2}-[0-9]{1,3}|banana)",
        )
            .prop_map(|(q, op, t)| format!("{q} {op} {t}")),
    ]
}

/// A `,`-free, `:`-free element: one block, or `||`/`&&` sections.
fn arb_element() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_block(),
        (arb_block(), arb_block()).prop_map(|(a, b)| format!("{a} || {b}")),
        (arb_block(), arb_block(), arb_block())
            .prop_map(|(a, b, c)| format!("{a} || {b} && {c}")),
    ]
}

fn arb_expr() -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_element(), 1..4).prop_map(|elements| elements.join(","))
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The evaluator never panics, whatever the input looks like.
    #[test]
    fn never_panics_on_arbitrary_input(query in "[ -~]{0,60}") {
        let part = StubPart::engine();
        let _ = evaluate(&query, &part);
    }

    /// An alias prefix is metadata: it never changes the boolean result.
    #[test]
    fn alias_prefix_never_changes_the_result(
        alias in "[a-zA-Z0-9_-]{0,12}",
        expr in arb_expr(),
    ) {
        let part = StubPart::engine();
        prop_assert_eq!(
            evaluate(&format!("{alias}:{expr}"), &part),
            evaluate(&expr, &part)
        );
    }

    /// `,` is disjunction: `a,b` holds exactly when `a` or `b` holds.
    #[test]
    fn comma_is_disjunction(a in arb_element(), b in arb_element()) {
        let part = StubPart::engine();
        prop_assert_eq!(
            evaluate(&format!("{a},{b}"), &part),
            evaluate(&a, &part) || evaluate(&b, &part)
        );
    }

    /// Evaluation is deterministic: the same query gives the same answer.
    #[test]
    fn evaluation_is_deterministic(expr in arb_expr()) {
        let part = StubPart::engine();
        prop_assert_eq!(evaluate(&expr, &part), evaluate(&expr, &part));
    }

    /// An empty query matches every part.
    #[test]
    fn empty_query_matches_any_part(name in "[a-zA-Z0-9]{1,16}") {
        let part = StubPart {
            name,
            store: InteropStore::new(),
        };
        prop_assert!(evaluate("", &part));
        prop_assert!(evaluate("   ", &part));
    }
}
