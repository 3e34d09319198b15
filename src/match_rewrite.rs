use std::collections::BTreeMap;

use crate::dedup::IdentifierRemap;

/// One row of the match table. Only the two team ids are ever rewritten;
/// `fields` carries the whole row as read so other columns pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub id_match: Option<i64>,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub fields: Vec<String>,
}

impl MatchRow {
    pub fn new(id_match: i64, home_team_id: i64, away_team_id: i64) -> Self {
        Self {
            id_match: Some(id_match),
            home_team_id,
            away_team_id,
            fields: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceCounts {
    pub home: usize,
    pub away: usize,
}

impl ReferenceCounts {
    pub fn total(&self) -> usize {
        self.home + self.away
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Retired id -> references rewritten, only for ids that appeared.
    pub per_retired_id: BTreeMap<i64, ReferenceCounts>,
    pub references_updated: usize,
    pub rows_touched: usize,
}

/// Points every home/away reference at its surviving team id.
///
/// Rows are independent of each other, so the result does not depend on
/// row order; running it twice with the same remap changes nothing the
/// second time.
pub fn rewrite_matches(rows: &mut [MatchRow], remap: &IdentifierRemap) -> RewriteStats {
    let mut stats = RewriteStats::default();
    if remap.is_empty() {
        return stats;
    }

    for row in rows.iter_mut() {
        let mut touched = false;
        if let Some(&surviving) = remap.get(&row.home_team_id) {
            stats
                .per_retired_id
                .entry(row.home_team_id)
                .or_default()
                .home += 1;
            row.home_team_id = surviving;
            touched = true;
        }
        if let Some(&surviving) = remap.get(&row.away_team_id) {
            stats
                .per_retired_id
                .entry(row.away_team_id)
                .or_default()
                .away += 1;
            row.away_team_id = surviving;
            touched = true;
        }
        if touched {
            stats.rows_touched += 1;
        }
    }
    stats.references_updated = stats.per_retired_id.values().map(ReferenceCounts::total).sum();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sides_can_collapse_onto_one_team() {
        let mut rows = vec![MatchRow::new(1, 3, 4)];
        let remap = IdentifierRemap::from([(3, 2), (4, 2)]);
        let stats = rewrite_matches(&mut rows, &remap);
        assert_eq!((rows[0].home_team_id, rows[0].away_team_id), (2, 2));
        assert_eq!(stats.references_updated, 2);
        assert_eq!(stats.rows_touched, 1);
        assert_eq!(
            stats.per_retired_id.get(&3),
            Some(&ReferenceCounts { home: 1, away: 0 })
        );
    }

    #[test]
    fn empty_remap_is_a_noop() {
        let mut rows = vec![MatchRow::new(1, 3, 4), MatchRow::new(2, 4, 5)];
        let before = rows.clone();
        let stats = rewrite_matches(&mut rows, &IdentifierRemap::new());
        assert_eq!(rows, before);
        assert_eq!(stats, RewriteStats::default());
    }

    #[test]
    fn second_pass_changes_nothing() {
        let mut rows = vec![MatchRow::new(1, 1, 3), MatchRow::new(2, 3, 5)];
        let remap = IdentifierRemap::from([(3, 2)]);
        rewrite_matches(&mut rows, &remap);
        let once = rows.clone();
        let stats = rewrite_matches(&mut rows, &remap);
        assert_eq!(rows, once);
        assert_eq!(stats.references_updated, 0);
    }

    #[test]
    fn untouched_fields_pass_through() {
        let mut row = MatchRow::new(7, 4, 1);
        row.fields = vec!["7".into(), "4".into(), "1".into(), "2-0".into()];
        let mut rows = vec![row];
        rewrite_matches(&mut rows, &IdentifierRemap::from([(4, 2)]));
        assert_eq!(rows[0].id_match, Some(7));
        assert_eq!(rows[0].home_team_id, 2);
        assert_eq!(rows[0].fields[3], "2-0");
    }
}
