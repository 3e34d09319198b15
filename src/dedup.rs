use std::collections::{BTreeMap, HashMap, HashSet};

use crate::team_records::EnrichedTeamRecord;

/// Retired team id -> surviving team id.
pub type IdentifierRemap = BTreeMap<i64, i64>;

/// Records that collapsed into one canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeGroup {
    pub canonical_name: String,
    /// Every id in the group, in input order.
    pub identifiers: Vec<i64>,
    pub surviving: i64,
    pub retired: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct Deduplicated {
    /// Collision-free records, ascending by id.
    pub records: Vec<EnrichedTeamRecord>,
    pub remap: IdentifierRemap,
    /// Ordered by first appearance of the canonical name.
    pub groups: Vec<MergeGroup>,
}

/// Collapses records sharing a canonical name onto the lowest id.
///
/// The lowest id wins regardless of input position or how complete the
/// record is; match history downstream is keyed on lower ids.
pub fn deduplicate(records: Vec<EnrichedTeamRecord>) -> Deduplicated {
    let (remap, groups) = collision_groups(&records);

    let retired: HashSet<i64> = remap.keys().copied().collect();
    let mut kept = records
        .into_iter()
        .filter(|record| !retired.contains(&record.id_team))
        .collect::<Vec<_>>();
    kept.sort_by_key(|record| record.id_team);

    Deduplicated {
        records: kept,
        remap,
        groups,
    }
}

fn collision_groups(records: &[EnrichedTeamRecord]) -> (IdentifierRemap, Vec<MergeGroup>) {
    let mut order: Vec<&str> = Vec::new();
    let mut by_name: HashMap<&str, Vec<i64>> = HashMap::new();
    for record in records {
        let ids = by_name.entry(record.canonical_name.as_str()).or_insert_with(|| {
            order.push(record.canonical_name.as_str());
            Vec::new()
        });
        ids.push(record.id_team);
    }

    let mut remap = IdentifierRemap::new();
    let mut groups = Vec::new();
    for name in order {
        let Some(ids) = by_name.get(name) else {
            continue;
        };
        if ids.len() < 2 {
            continue;
        }
        let Some(&surviving) = ids.iter().min() else {
            continue;
        };
        let retired = ids
            .iter()
            .copied()
            .filter(|id| *id != surviving)
            .collect::<Vec<_>>();
        for id in &retired {
            remap.insert(*id, surviving);
        }
        groups.push(MergeGroup {
            canonical_name: name.to_string(),
            identifiers: ids.clone(),
            surviving,
            retired,
        });
    }

    (remap, groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> EnrichedTeamRecord {
        EnrichedTeamRecord {
            id_team: id,
            canonical_name: name.to_string(),
            confederation: None,
            aliases: Vec::new(),
        }
    }

    #[test]
    fn lowest_id_survives_even_when_seen_last() {
        let out = deduplicate(vec![
            record(9, "Germany"),
            record(3, "France"),
            record(5, "Germany"),
            record(2, "Germany"),
        ]);
        assert_eq!(
            out.records.iter().map(|r| r.id_team).collect::<Vec<_>>(),
            [2, 3]
        );
        assert_eq!(out.remap, IdentifierRemap::from([(9, 2), (5, 2)]));
        assert_eq!(out.groups.len(), 1);
        assert_eq!(out.groups[0].identifiers, [9, 5, 2]);
        assert_eq!(out.groups[0].retired, [9, 5]);
    }

    #[test]
    fn singletons_pass_through_without_remap() {
        let out = deduplicate(vec![record(4, "Brazil"), record(1, "France")]);
        assert!(out.remap.is_empty());
        assert!(out.groups.is_empty());
        assert_eq!(out.records, vec![record(1, "France"), record(4, "Brazil")]);
    }

    #[test]
    fn surviving_record_keeps_its_own_metadata() {
        let mut low = record(1, "Serbia");
        low.aliases = vec!["Srbija".to_string()];
        let mut high = record(8, "Serbia");
        high.aliases = vec!["Serbia (Србија)".to_string()];
        let out = deduplicate(vec![high, low.clone()]);
        assert_eq!(out.records, vec![low]);
    }

    #[test]
    fn groups_follow_first_appearance() {
        let out = deduplicate(vec![
            record(10, "B"),
            record(1, "A"),
            record(2, "B"),
            record(3, "A"),
        ]);
        let names = out
            .groups
            .iter()
            .map(|g| g.canonical_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = deduplicate(Vec::new());
        assert!(out.records.is_empty());
        assert!(out.remap.is_empty());
    }
}
