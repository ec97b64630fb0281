//! Property-based tests for viewtx.
//!
//! Uses proptest to verify the catalog and injector invariants hold for
//! arbitrary names and timing configurations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use std::rc::Rc;
use viewtx::{
    generate_css, AnimationConfig, AnimationKind, Fingerprint, MemoryDocument, StyleInjector,
    TransitionSpec,
};

fn any_kind() -> impl Strategy<Value = AnimationKind> {
    (0..AnimationKind::ALL.len()).prop_map(|i| AnimationKind::ALL[i])
}

fn any_easing() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ease".to_string()),
        Just("linear".to_string()),
        Just("ease-in-out".to_string()),
        (0u8..=100, 0u8..=100).prop_map(|(a, b)| format!(
            "cubic-bezier(0.{a:02}, 0, 0.{b:02}, 1)"
        )),
        (1u8..=12).prop_map(|n| format!("steps({n}, end)")),
    ]
}

fn any_spec() -> impl Strategy<Value = TransitionSpec> {
    ("[a-z][a-z0-9-]{0,15}", any_kind(), 1u32..10_000, any_easing()).prop_map(
        |(name, kind, ms, easing)| {
            TransitionSpec::new(name, kind, AnimationConfig::new(ms, easing).unwrap()).unwrap()
        },
    )
}

// === Catalog ===

proptest! {
    /// Identical input yields byte-identical output.
    #[test]
    fn prop_generate_is_pure(spec in any_spec()) {
        prop_assert_eq!(generate_css(&spec), generate_css(&spec.clone()));
    }

    /// Output names the group in both snapshot rules and carries the timing.
    #[test]
    fn prop_generate_references_name_and_timing(spec in any_spec()) {
        let css = generate_css(&spec);
        let old_rule = format!("::view-transition-old({})", spec.name());
        let new_rule = format!("::view-transition-new({})", spec.name());
        let timing = format!("{}ms {};", spec.config().duration_ms(), spec.config().easing());
        prop_assert!(css.contains(&old_rule));
        prop_assert!(css.contains(&new_rule));
        prop_assert_eq!(css.matches(&timing).count(), 2);
        prop_assert_eq!(css.matches("@keyframes ").count(), 2);
    }
}

// === Injector ===

proptest! {
    /// Repeating a fingerprint never duplicates CSS.
    #[test]
    fn prop_inject_once_is_idempotent(spec in any_spec(), repeats in 1usize..8) {
        let doc = Rc::new(MemoryDocument::new());
        let injector = StyleInjector::new(Rc::clone(&doc));
        let css = generate_css(&spec);
        for _ in 0..repeats {
            injector.inject_once(&css, &spec.fingerprint()).unwrap();
        }
        prop_assert_eq!(doc.all_style_text(), css);
    }

    /// Distinct fingerprints append in call order; lengths add up.
    #[test]
    fn prop_distinct_fingerprints_append_in_order(a in any_spec(), b in any_spec()) {
        prop_assume!(a.fingerprint() != b.fingerprint());
        let doc = Rc::new(MemoryDocument::new());
        let injector = StyleInjector::new(Rc::clone(&doc));
        let (css_a, css_b) = (generate_css(&a), generate_css(&b));
        injector.inject_once(&css_a, &a.fingerprint()).unwrap();
        injector.inject_once(&css_b, &b.fingerprint()).unwrap();

        let text = doc.all_style_text();
        prop_assert_eq!(text.len(), css_a.len() + css_b.len());
        prop_assert_eq!(text, format!("{css_a}{css_b}"));
    }

    /// Exactly one style container no matter how many injections happen.
    #[test]
    fn prop_single_container(keys in prop::collection::vec("[a-z]{1,6}", 1..40)) {
        let doc = Rc::new(MemoryDocument::new());
        let injector = StyleInjector::new(Rc::clone(&doc));
        for key in &keys {
            injector.inject_once(".x{}", &Fingerprint::new(key.clone())).unwrap();
        }
        prop_assert_eq!(doc.style_container_count(), 1);
    }
}
