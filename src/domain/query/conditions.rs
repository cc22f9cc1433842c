use super::builder::BooleanBuilder;
use super::predicate::{Field, Predicate};
use crate::domain::search::MemberSearchCondition;

/// Keeps `value` only when it holds something other than whitespace
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// `username = value`, or `None` when the value is absent or blank
pub fn username_eq(username: Option<&str>) -> Option<Predicate> {
    non_blank(username).map(|v| Field::Username.eq(v))
}

/// `team.name = value`, or `None` when the value is absent or blank
pub fn team_name_eq(team_name: Option<&str>) -> Option<Predicate> {
    non_blank(team_name).map(|v| Field::TeamName.eq(v))
}

/// `age >= value`, or `None` when absent
///
/// Negative bounds are passed through unchanged.
pub fn age_goe(age_goe: Option<i32>) -> Option<Predicate> {
    age_goe.map(|v| Field::Age.goe(v))
}

/// `age <= value`, or `None` when absent
pub fn age_loe(age_loe: Option<i32>) -> Option<Predicate> {
    age_loe.map(|v| Field::Age.loe(v))
}

/// Both age bounds as one predicate
///
/// Either bound alone is returned unchanged; with neither present the
/// result is `None`. The default search path applies [`age_goe`] and
/// [`age_loe`] independently instead.
pub fn age_between(age_loe_value: Option<i32>, age_goe_value: Option<i32>) -> Option<Predicate> {
    match (age_loe(age_loe_value), age_goe(age_goe_value)) {
        (Some(loe), Some(goe)) => Some(loe.and(goe)),
        (Some(loe), None) => Some(loe),
        (None, goe) => goe,
    }
}

/// Per-field predicates for a search, with absent fields omitted
///
/// The list is empty when no field is populated.
pub fn search_predicates(condition: &MemberSearchCondition) -> Vec<Predicate> {
    [
        username_eq(condition.username.as_deref()),
        team_name_eq(condition.team_name.as_deref()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// The whole search folded into one predicate by accumulation
pub fn search_conjunction(condition: &MemberSearchCondition) -> Predicate {
    let mut builder = BooleanBuilder::new();

    if let Some(username) = non_blank(condition.username.as_deref()) {
        builder.and(Field::Username.eq(username));
    }
    if let Some(team_name) = non_blank(condition.team_name.as_deref()) {
        builder.and(Field::TeamName.eq(team_name));
    }
    if let Some(age) = condition.age_goe {
        builder.and(Field::Age.goe(age));
    }
    if let Some(age) = condition.age_loe {
        builder.and(Field::Age.loe(age));
    }

    builder.build()
}
