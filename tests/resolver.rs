use std::collections::{HashMap, HashSet};

use wc_teams_etl::reference::{Confederation, ReferenceData};
use wc_teams_etl::reference_tables::{ALIASES, PLACEHOLDERS};
use wc_teams_etl::resolver::{Resolution, confederation_of_raw, resolve, resolve_detailed};

#[test]
fn corrupted_encoding_resolves_through_alias_table() {
    let reference = ReferenceData::builtin();
    assert_eq!(
        resolve(Some("C\u{FFFD}te d'Ivoire"), reference).as_deref(),
        Some("Côte d'Ivoire")
    );
}

#[test]
fn placeholder_tokens_are_not_teams() {
    let reference = ReferenceData::builtin();
    assert_eq!(resolve(Some("A1"), reference), None);
    assert_eq!(resolve(Some("  WINNER X "), reference), None);
    for token in PLACEHOLDERS {
        assert_eq!(resolve(Some(token), reference), None, "token {token}");
    }
}

#[test]
fn uppercase_canonical_name_resolves_case_insensitively() {
    let reference = ReferenceData::builtin();
    assert_eq!(
        resolve_detailed(Some("ARGENTINA"), reference),
        Resolution::CanonicalCaseFold("Argentina".to_string())
    );
}

#[test]
fn unknown_name_passes_through_without_confederation() {
    let reference = ReferenceData::builtin();
    assert_eq!(
        resolve(Some("Unknown Team"), reference).as_deref(),
        Some("Unknown Team")
    );
    assert_eq!(confederation_of_raw("Unknown Team", reference), None);
}

#[test]
fn missing_value_is_none() {
    assert_eq!(resolve(None, ReferenceData::builtin()), None);
}

#[test]
fn every_canonical_name_resolves_to_itself() {
    let reference = ReferenceData::builtin();
    for name in reference.canonical_names() {
        assert_eq!(resolve(Some(name), reference).as_deref(), Some(name.as_str()));
    }
}

#[test]
fn every_alias_resolves_to_its_table_target() {
    let reference = ReferenceData::builtin();

    let mut targets_by_lower: HashMap<String, HashSet<&str>> = HashMap::new();
    for (alias, _) in ALIASES {
        if let Some(target) = reference.alias_target(alias) {
            targets_by_lower
                .entry(alias.to_lowercase())
                .or_default()
                .insert(target);
        }
    }

    for (alias, _) in ALIASES {
        let expected = reference.alias_target(alias);
        assert!(expected.is_some(), "alias {alias} missing from lookup");
        assert_eq!(resolve(Some(alias), reference).as_deref(), expected);

        // Aliases sharing a lower-case form with a different target are ambiguous.
        if targets_by_lower[&alias.to_lowercase()].len() > 1 {
            continue;
        }
        for variant in [alias.to_uppercase(), alias.to_lowercase()] {
            if reference.is_placeholder(variant.trim()) {
                continue;
            }
            let exact = reference.alias_target(&variant);
            if exact.is_some_and(|target| Some(target) != expected) {
                continue;
            }
            assert_eq!(
                resolve(Some(&variant), reference).as_deref(),
                expected,
                "case variant {variant:?} of {alias:?}"
            );
        }
    }
}

#[test]
fn historical_teams_keep_their_own_name() {
    let reference = ReferenceData::builtin();
    assert_eq!(
        resolve(Some("Soviet Union"), reference).as_deref(),
        Some("Soviet Union")
    );
    assert_eq!(
        confederation_of_raw("Zaire", reference),
        Some(Confederation::CAF)
    );
    assert_eq!(reference.successor("Zaire"), Some("Congo DR"));
}

#[test]
fn legacy_germany_names_fold_into_germany() {
    let reference = ReferenceData::builtin();
    for raw in ["West Germany", "FRG", "BRD", "west germany"] {
        assert_eq!(resolve(Some(raw), reference).as_deref(), Some("Germany"), "{raw}");
    }
    assert_eq!(
        confederation_of_raw("West Germany", reference),
        Some(Confederation::UEFA)
    );
}
