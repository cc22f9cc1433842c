use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};

use super::conditions::{search_conjunction, search_predicates};
use super::predicate::Predicate;
use crate::domain::search::MemberSearchCondition;

/// How a search condition is turned into the predicates handed to the executor
///
/// Both strategies select the same rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Fold every present field into one accumulated conjunction
    Builder,
    /// Pass one predicate per present field and let the executor AND them
    #[default]
    PredicateList,
}

impl SearchStrategy {
    pub fn compose(self, condition: &MemberSearchCondition) -> Vec<Predicate> {
        match self {
            SearchStrategy::Builder => vec![search_conjunction(condition)],
            SearchStrategy::PredicateList => search_predicates(condition),
        }
    }
}

/// Reads a strategy name; an empty value selects the default strategy
pub fn blank_as_default<'de, D>(deserializer: D) -> Result<SearchStrategy, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(name) if !name.trim().is_empty() => {
            let variant: StrDeserializer<'_, D::Error> = name.trim().into_deserializer();
            SearchStrategy::deserialize(variant)
        }
        _ => Ok(SearchStrategy::default()),
    }
}
