use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use wc_teams_etl::dedup::{IdentifierRemap, deduplicate};
use wc_teams_etl::match_rewrite::{MatchRow, rewrite_matches};
use wc_teams_etl::reference::ReferenceData;
use wc_teams_etl::team_records::{EnrichedTeamRecord, RawTeamRow, build_team_records};

fn sample_rows() -> Vec<RawTeamRow> {
    vec![
        RawTeamRow::new(1, "France"),
        RawTeamRow::new(2, "West Germany"),
        RawTeamRow::new(3, "Brazil"),
        RawTeamRow::new(4, "Germany"),
        RawTeamRow::new(7, "FRG"),
        RawTeamRow::new(8, "Brazil (Brasil)"),
        RawTeamRow::new(9, "Unknown Team"),
        RawTeamRow::new(10, "unknown team"),
    ]
}

fn records() -> Vec<EnrichedTeamRecord> {
    build_team_records(&sample_rows(), ReferenceData::builtin()).records
}

#[test]
fn sample_collapses_germany_onto_id_two() {
    let rows = vec![
        RawTeamRow::new(1, "France"),
        RawTeamRow::new(2, "West Germany"),
        RawTeamRow::new(3, "Brazil"),
        RawTeamRow::new(4, "Germany"),
    ];
    let built = build_team_records(&rows, ReferenceData::builtin());
    let names = built
        .records
        .iter()
        .map(|r| r.canonical_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["France", "Germany", "Brazil", "Germany"]);

    let deduped = deduplicate(built.records);
    assert_eq!(deduped.remap, IdentifierRemap::from([(4, 2)]));
    assert_eq!(deduped.records.len(), 3);
}

#[test]
fn deduplication_ignores_input_order() {
    let expected = deduplicate(records());
    let mut rng = StdRng::seed_from_u64(26);
    for _ in 0..32 {
        let mut shuffled = records();
        shuffled.shuffle(&mut rng);
        let got = deduplicate(shuffled);
        assert_eq!(got.remap, expected.remap);
        assert_eq!(got.records, expected.records);
    }
}

#[test]
fn surviving_ids_are_unique_and_minimal() {
    let deduped = deduplicate(records());
    let mut names = deduped
        .records
        .iter()
        .map(|r| r.canonical_name.clone())
        .collect::<Vec<_>>();
    let before = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), before);

    for (retired, surviving) in &deduped.remap {
        assert!(surviving < retired);
        assert!(!deduped.remap.contains_key(surviving));
    }
}

#[test]
fn raw_pass_through_names_differing_in_case_stay_apart() {
    let deduped = deduplicate(records());
    assert!(!deduped.remap.contains_key(&10));
}

#[test]
fn retired_ids_map_to_shared_survivor() {
    let mut rows = vec![MatchRow::new(1, 3, 4)];
    let remap = IdentifierRemap::from([(3, 2), (4, 2)]);
    let stats = rewrite_matches(&mut rows, &remap);
    assert_eq!((rows[0].home_team_id, rows[0].away_team_id), (2, 2));
    assert_eq!(stats.references_updated, 2);
}

#[test]
fn rewritten_matches_reference_no_retired_id() {
    let deduped = deduplicate(records());
    let mut rng = StdRng::seed_from_u64(2026);
    let ids = [1, 2, 3, 4, 7, 8, 9, 10];
    let mut rows = (0..200)
        .map(|n| {
            let home = *ids.choose(&mut rng).unwrap_or(&1);
            let away = *ids.choose(&mut rng).unwrap_or(&2);
            MatchRow::new(n, home, away)
        })
        .collect::<Vec<_>>();

    let first = rewrite_matches(&mut rows, &deduped.remap);
    assert!(first.references_updated > 0);
    for row in &rows {
        assert!(!deduped.remap.contains_key(&row.home_team_id));
        assert!(!deduped.remap.contains_key(&row.away_team_id));
    }

    let snapshot = rows.clone();
    let second = rewrite_matches(&mut rows, &deduped.remap);
    assert_eq!(second.references_updated, 0);
    assert_eq!(rows, snapshot);
}

#[test]
fn unknown_names_differing_by_whitespace_stay_apart() {
    let rows = vec![
        RawTeamRow::new(1, "Atlantis"),
        RawTeamRow::new(2, "Atlantis "),
    ];
    let built = build_team_records(&rows, ReferenceData::builtin());
    assert_eq!(built.unmatched, ["Atlantis", "Atlantis "]);
    assert_eq!(built.records[1].canonical_name, "Atlantis ");

    let deduped = deduplicate(built.records);
    assert!(deduped.remap.is_empty());
    assert_eq!(deduped.records.len(), 2);
}
