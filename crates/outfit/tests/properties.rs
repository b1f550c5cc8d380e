//! Property tests for variant resolution, class merging and the pure helpers
//! components build on.

use std::collections::BTreeSet;

use outfit::{
    button_variants, cn, country, fuzzy_score, normalize_e164, ButtonEffect, ButtonSize,
    ButtonVariant, VariantRequest, VariantTable, COUNTRIES,
};
use proptest::prelude::*;

const TOKENS: &[&str] = &[
    "h-10", "h-12", "w-full", "px-2", "px-4", "py-1", "p-3", "bg-red-500", "bg-primary",
    "hover:bg-red-600", "text-sm", "text-lg", "text-white", "block", "flex", "hidden", "rounded",
    "rounded-md", "mt-2", "border", "border-2", "shadow-lg", "custom-token",
];

fn classes() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TOKENS), 0..8).prop_map(|tokens| tokens.join(" "))
}

fn request() -> impl Strategy<Value = VariantRequest> {
    (
        prop::option::of(prop::sample::select(ButtonVariant::ALL)),
        prop::option::of(prop::sample::select(ButtonSize::ALL)),
        prop::option::of(prop::sample::select(ButtonEffect::ALL)),
        prop::option::of(classes()),
    )
        .prop_map(|(variant, size, effect, class)| VariantRequest {
            variant,
            size,
            effect,
            class,
        })
}

proptest! {
    #[test]
    fn resolution_is_deterministic(req in request()) {
        let first = button_variants(&req);
        let second = button_variants(&req);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, VariantTable::button().resolve(&req));
    }

    #[test]
    fn variant_tokens_survive_resolution(variant in prop::sample::select(ButtonVariant::ALL)) {
        let table = VariantTable::button();
        let resolved = table.resolve(&VariantRequest::new().variant(variant));
        for token in table.variant(variant).into_iter().flat_map(|list| list.iter()) {
            prop_assert!(resolved.contains(token), "{} lost {}", variant, token);
        }
        prop_assert!(resolved.contains("inline-flex"));
    }

    #[test]
    fn variant_resolves_to_exactly_its_documented_tokens(
        variant in prop::sample::select(ButtonVariant::ALL),
    ) {
        let table = VariantTable::button();
        let resolved = table.resolve(&VariantRequest::new().variant(variant));
        let resolved: BTreeSet<&str> = resolved.iter().collect();
        let expected: BTreeSet<&str> = table
            .base()
            .iter()
            .chain(table.variant(variant).into_iter().flat_map(|list| list.iter()))
            .chain(table.size(ButtonSize::Default).into_iter().flat_map(|list| list.iter()))
            .collect();
        prop_assert_eq!(resolved, expected, "{} resolved to extra or missing tokens", variant);
    }

    #[test]
    fn caller_tokens_win(req in request(), last in prop::sample::select(TOKENS)) {
        let req = req.class(last);
        prop_assert!(button_variants(&req).contains(last));
    }

    #[test]
    fn merge_is_idempotent(input in classes()) {
        let once = cn([input.as_str()]).to_string();
        let twice = cn([once.as_str()]).to_string();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(cn([input.as_str(), input.as_str()]).to_string(), once);
    }

    #[test]
    fn merge_never_repeats_a_token(input in classes()) {
        let merged = cn([input.as_str()]);
        let mut seen: Vec<&str> = merged.iter().collect();
        let len = seen.len();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), len);
    }

    #[test]
    fn candidates_match_themselves(word in "[a-z]{1,12}") {
        prop_assert!(fuzzy_score(&word, &word).is_some());
        prop_assert!(fuzzy_score(&word.to_uppercase(), &word).is_some());
    }

    #[test]
    fn normalized_numbers_are_e164(
        index in 0..COUNTRIES.len(),
        raw in "[0-9 ()+-]{0,20}",
    ) {
        let Some(country) = country(COUNTRIES[index].iso) else {
            return Err(TestCaseError::fail("table lookup failed"));
        };
        if let Some(number) = normalize_e164(country, &raw) {
            prop_assert!(number.starts_with('+'));
            prop_assert!(number[1..].chars().all(|c| c.is_ascii_digit()));
            prop_assert!((2..=16).contains(&number.len()));
        }
    }
}
