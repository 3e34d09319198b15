use std::collections::{HashMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::reference_tables::{ADDITIONAL_TEAMS, ALIASES, FIFA_RANKING, HISTORICAL_TEAMS, PLACEHOLDERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Confederation {
    AFC,
    CAF,
    CONCACAF,
    CONMEBOL,
    UEFA,
    OFC,
}

impl Confederation {
    pub const ALL: [Confederation; 6] = [
        Confederation::AFC,
        Confederation::CAF,
        Confederation::CONCACAF,
        Confederation::CONMEBOL,
        Confederation::UEFA,
        Confederation::OFC,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Confederation::AFC => "AFC",
            Confederation::CAF => "CAF",
            Confederation::CONCACAF => "CONCACAF",
            Confederation::CONMEBOL => "CONMEBOL",
            Confederation::UEFA => "UEFA",
            Confederation::OFC => "OFC",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|confed| confed.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Confederation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dissolved national team whose results stay under its own name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalTeam {
    pub dissolution_year: i32,
    pub successor: Option<String>,
    pub confederation: Confederation,
}

/// One row of the full teams reference (`teams_reference` binary output).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamReferenceEntry {
    #[serde(skip)]
    pub name: String,
    pub confederation: Confederation,
    pub aliases: Vec<String>,
    pub is_historical: bool,
    pub fifa_successor: Option<String>,
    pub dissolved_year: Option<i32>,
}

/// Immutable lookup tables shared by every stage of a normalization run.
///
/// Built once through [`ReferenceDataBuilder`]; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    alias_to_canonical: HashMap<String, String>,
    alias_to_canonical_lower: HashMap<String, String>,
    confederations: HashMap<String, Confederation>,
    canonical_lower: HashMap<String, String>,
    canonical_order: Vec<String>,
    placeholders: HashSet<String>,
    historical: HashMap<String, HistoricalTeam>,
    aliases_by_canonical: HashMap<String, Vec<String>>,
}

static BUILTIN: Lazy<ReferenceData> = Lazy::new(|| {
    ReferenceDataBuilder::with_static_tables()
        .rankings(FIFA_RANKING.iter().map(|(name, confed)| (*name, *confed)))
        .build()
});

impl ReferenceData {
    pub fn builder() -> ReferenceDataBuilder {
        ReferenceDataBuilder::default()
    }

    /// Reference data built from the embedded tables and ranking snapshot.
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    pub fn alias_target(&self, name: &str) -> Option<&str> {
        self.alias_to_canonical.get(name).map(String::as_str)
    }

    pub fn alias_target_casefold(&self, lowered: &str) -> Option<&str> {
        self.alias_to_canonical_lower.get(lowered).map(String::as_str)
    }

    pub fn canonical_casefold(&self, lowered: &str) -> Option<&str> {
        self.canonical_lower.get(lowered).map(String::as_str)
    }

    pub fn confederation(&self, canonical: &str) -> Option<Confederation> {
        self.confederations.get(canonical).copied()
    }

    pub fn is_known_canonical(&self, name: &str) -> bool {
        self.confederations.contains_key(name)
    }

    pub fn is_placeholder(&self, name: &str) -> bool {
        self.placeholders.contains(name)
    }

    pub fn is_historical(&self, name: &str) -> bool {
        self.historical.contains_key(name)
    }

    pub fn historical(&self, name: &str) -> Option<&HistoricalTeam> {
        self.historical.get(name)
    }

    pub fn successor(&self, name: &str) -> Option<&str> {
        self.historical.get(name)?.successor.as_deref()
    }

    pub fn dissolution_year(&self, name: &str) -> Option<i32> {
        self.historical.get(name).map(|h| h.dissolution_year)
    }

    /// Aliases of `canonical` in alias-table order; empty for unknown names.
    pub fn aliases_of(&self, canonical: &str) -> &[String] {
        self.aliases_by_canonical
            .get(canonical)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every name that has a confederation, in load order.
    pub fn canonical_names(&self) -> &[String] {
        &self.canonical_order
    }

    pub fn teams_reference(&self) -> Vec<TeamReferenceEntry> {
        let mut out = self
            .canonical_order
            .iter()
            .filter_map(|name| {
                let confederation = self.confederation(name)?;
                let historical = self.historical(name);
                Some(TeamReferenceEntry {
                    name: name.clone(),
                    confederation,
                    aliases: self.aliases_of(name).to_vec(),
                    is_historical: historical.is_some(),
                    fifa_successor: historical.and_then(|h| h.successor.clone()),
                    dissolved_year: historical.map(|h| h.dissolution_year),
                })
            })
            .collect::<Vec<_>>();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceDataBuilder {
    rankings: Vec<(String, Confederation)>,
    historical: Vec<(String, HistoricalTeam)>,
    additional: Vec<(String, Confederation)>,
    placeholders: Vec<String>,
    aliases: Vec<(String, String)>,
}

impl ReferenceDataBuilder {
    /// Builder preloaded with every embedded table except the ranking source.
    pub fn with_static_tables() -> Self {
        Self::default()
            .historical(HISTORICAL_TEAMS.iter().map(|(name, year, successor, confed)| {
                (
                    *name,
                    HistoricalTeam {
                        dissolution_year: *year,
                        successor: successor.map(str::to_string),
                        confederation: *confed,
                    },
                )
            }))
            .additional(ADDITIONAL_TEAMS.iter().map(|(name, confed)| (*name, *confed)))
            .placeholders(PLACEHOLDERS.iter().copied())
            .aliases(ALIASES.iter().map(|(alias, canonical)| (*alias, *canonical)))
    }

    pub fn rankings<S: Into<String>>(
        mut self,
        rows: impl IntoIterator<Item = (S, Confederation)>,
    ) -> Self {
        self.rankings
            .extend(rows.into_iter().map(|(name, confed)| (name.into(), confed)));
        self
    }

    pub fn historical<S: Into<String>>(
        mut self,
        rows: impl IntoIterator<Item = (S, HistoricalTeam)>,
    ) -> Self {
        self.historical
            .extend(rows.into_iter().map(|(name, team)| (name.into(), team)));
        self
    }

    pub fn additional<S: Into<String>>(
        mut self,
        rows: impl IntoIterator<Item = (S, Confederation)>,
    ) -> Self {
        self.additional
            .extend(rows.into_iter().map(|(name, confed)| (name.into(), confed)));
        self
    }

    pub fn placeholders<S: Into<String>>(mut self, tokens: impl IntoIterator<Item = S>) -> Self {
        self.placeholders.extend(tokens.into_iter().map(Into::into));
        self
    }

    pub fn aliases<A: Into<String>, C: Into<String>>(
        mut self,
        rows: impl IntoIterator<Item = (A, C)>,
    ) -> Self {
        self.aliases.extend(
            rows.into_iter()
                .map(|(alias, canonical)| (alias.into(), canonical.into())),
        );
        self
    }

    pub fn build(self) -> ReferenceData {
        let mut confederations = HashMap::new();
        let mut canonical_order = Vec::new();
        let mut insert_confed = |name: String, confed: Confederation| {
            if confederations.insert(name.clone(), confed).is_none() {
                canonical_order.push(name);
            }
        };

        // Historical and additional entries override stale ranking rows.
        for (name, confed) in self.rankings {
            insert_confed(name, confed);
        }
        let mut historical = HashMap::new();
        for (name, team) in self.historical {
            insert_confed(name.clone(), team.confederation);
            historical.insert(name, team);
        }
        for (name, confed) in self.additional {
            insert_confed(name, confed);
        }

        let alias_table = dedup_keep_first_position(self.aliases);

        let mut alias_to_canonical = HashMap::new();
        let mut canonical_lower = HashMap::new();
        for name in &canonical_order {
            alias_to_canonical.insert(name.clone(), name.clone());
            canonical_lower.insert(name.to_lowercase(), name.clone());
        }

        let mut alias_to_canonical_lower = HashMap::new();
        let mut aliases_by_canonical: HashMap<String, Vec<String>> = HashMap::new();
        for (alias, canonical) in alias_table {
            alias_to_canonical_lower.insert(alias.to_lowercase(), canonical.clone());
            aliases_by_canonical
                .entry(canonical.clone())
                .or_default()
                .push(alias.clone());
            alias_to_canonical.insert(alias, canonical);
        }

        ReferenceData {
            alias_to_canonical,
            alias_to_canonical_lower,
            confederations,
            canonical_lower,
            canonical_order,
            placeholders: self.placeholders.into_iter().collect(),
            historical,
            aliases_by_canonical,
        }
    }
}

/// A repeated alias keeps the slot of its first occurrence and the value of
/// its last one.
fn dedup_keep_first_position(rows: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<(String, String)> = Vec::with_capacity(rows.len());
    for (alias, canonical) in rows {
        match index.get(&alias) {
            Some(&pos) => out[pos].1 = canonical,
            None => {
                index.insert(alias.clone(), out.len());
                out.push((alias, canonical));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> ReferenceData {
        ReferenceData::builder()
            .rankings([
                ("France", Confederation::UEFA),
                ("Germany", Confederation::UEFA),
                ("Zaire", Confederation::AFC),
            ])
            .historical([(
                "Zaire",
                HistoricalTeam {
                    dissolution_year: 1997,
                    successor: Some("Congo DR".to_string()),
                    confederation: Confederation::CAF,
                },
            )])
            .additional([("Tonga", Confederation::OFC)])
            .aliases([
                ("West Germany", "Germany"),
                ("FRG", "Germany"),
                ("Zaïre", "Zaire"),
                ("West Germany", "GDR"),
            ])
            .build()
    }

    #[test]
    fn historical_overrides_stale_ranking_confederation() {
        let data = small();
        assert_eq!(data.confederation("Zaire"), Some(Confederation::CAF));
        assert_eq!(data.successor("Zaire"), Some("Congo DR"));
        assert_eq!(data.dissolution_year("Zaire"), Some(1997));
        assert_eq!(data.confederation("Tonga"), Some(Confederation::OFC));
        assert_eq!(data.canonical_names(), ["France", "Germany", "Zaire", "Tonga"]);
    }

    #[test]
    fn repeated_alias_keeps_first_slot_and_last_value() {
        let data = small();
        assert_eq!(data.alias_target("West Germany"), Some("GDR"));
        assert_eq!(data.aliases_of("Germany"), ["FRG"]);
        assert_eq!(data.aliases_of("GDR"), ["West Germany"]);
        assert_eq!(data.alias_target_casefold("west germany"), Some("GDR"));
    }

    #[test]
    fn canonical_names_map_to_themselves() {
        let data = small();
        assert_eq!(data.alias_target("France"), Some("France"));
        assert_eq!(data.canonical_casefold("france"), Some("France"));
        assert!(data.aliases_of("France").is_empty());
    }

    #[test]
    fn confederation_parse_is_case_insensitive() {
        assert_eq!(Confederation::parse(" uefa "), Some(Confederation::UEFA));
        assert_eq!(Confederation::parse("Concacaf"), Some(Confederation::CONCACAF));
        assert_eq!(Confederation::parse("FIFA"), None);
    }

    #[test]
    fn builtin_covers_every_alias_target_that_is_a_team() {
        let data = ReferenceData::builtin();
        for (_, canonical) in ALIASES {
            // Swaziland is kept under its old name on purpose; it has no ranking row.
            if *canonical == "Swaziland" {
                continue;
            }
            assert!(
                data.is_known_canonical(canonical),
                "alias target {canonical} has no confederation"
            );
        }
    }

    #[test]
    fn builtin_reference_lists_historical_successors() {
        let entries = ReferenceData::builtin().teams_reference();
        let gdr = entries.iter().find(|e| e.name == "GDR").expect("GDR entry");
        assert!(gdr.is_historical);
        assert_eq!(gdr.fifa_successor.as_deref(), Some("Germany"));
        assert_eq!(gdr.dissolved_year, Some(1990));
        let antilles = entries
            .iter()
            .find(|e| e.name == "Dutch Antilles")
            .expect("Dutch Antilles entry");
        assert_eq!(antilles.fifa_successor, None);
        assert!(entries.windows(2).all(|w| w[0].name <= w[1].name));
    }
}
