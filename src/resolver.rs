use crate::reference::{Confederation, ReferenceData};

/// A fixed prefix that identifies a team whose native-script qualifier has
/// too many spellings to enumerate in the alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: &'static str,
    pub result: &'static str,
}

/// Evaluated in order, first match wins.
pub const PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule {
        prefix: "Ethiopia (",
        result: "Ethiopia",
    },
    PrefixRule {
        // Covers both the straight and the curly apostrophe.
        prefix: "Ivory Coast (Côte d",
        result: "Côte d'Ivoire",
    },
    PrefixRule {
        prefix: "Armenia (",
        result: "Armenia",
    },
];

/// Which lookup step produced a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Missing,
    Placeholder,
    Alias(String),
    AliasCaseFold(String),
    CanonicalCaseFold(String),
    PrefixRule(&'static str),
    PassThrough(String),
}

impl Resolution {
    pub fn name(&self) -> Option<&str> {
        match self {
            Resolution::Missing | Resolution::Placeholder => None,
            Resolution::Alias(name)
            | Resolution::AliasCaseFold(name)
            | Resolution::CanonicalCaseFold(name)
            | Resolution::PassThrough(name) => Some(name),
            Resolution::PrefixRule(name) => Some(name),
        }
    }

    pub fn into_name(self) -> Option<String> {
        match self {
            Resolution::Missing | Resolution::Placeholder => None,
            Resolution::Alias(name)
            | Resolution::AliasCaseFold(name)
            | Resolution::CanonicalCaseFold(name)
            | Resolution::PassThrough(name) => Some(name),
            Resolution::PrefixRule(name) => Some(name.to_string()),
        }
    }
}

/// Maps a raw team string to its canonical name, or `None` when it is not a
/// team (missing value or placeholder token).
pub fn resolve(raw: Option<&str>, reference: &ReferenceData) -> Option<String> {
    resolve_detailed(raw, reference).into_name()
}

pub fn resolve_detailed(raw: Option<&str>, reference: &ReferenceData) -> Resolution {
    let Some(raw) = raw else {
        return Resolution::Missing;
    };
    let name = raw.trim();
    if reference.is_placeholder(name) {
        return Resolution::Placeholder;
    }

    if let Some(canonical) = reference.alias_target(name) {
        return Resolution::Alias(canonical.to_string());
    }

    let lowered = name.to_lowercase();
    if let Some(canonical) = reference.alias_target_casefold(&lowered) {
        return Resolution::AliasCaseFold(canonical.to_string());
    }
    if let Some(canonical) = reference.canonical_casefold(&lowered) {
        return Resolution::CanonicalCaseFold(canonical.to_string());
    }

    if let Some(rule) = match_prefix_rule(name, PREFIX_RULES) {
        return Resolution::PrefixRule(rule.result);
    }

    Resolution::PassThrough(name.to_string())
}

pub fn match_prefix_rule<'a>(name: &str, rules: &'a [PrefixRule]) -> Option<&'a PrefixRule> {
    rules.iter().find(|rule| name.starts_with(rule.prefix))
}

/// Confederation of a raw (not yet resolved) team string.
pub fn confederation_of_raw(raw: &str, reference: &ReferenceData) -> Option<Confederation> {
    let resolution = resolve_detailed(Some(raw), reference);
    reference.confederation(resolution.name()?)
}
