use serde::Deserialize;

use super::query_value::blank_as_none;

/// Optional-field input driving a member search
///
/// Every field is independent and absent by default. Blank strings are
/// accepted and later treated exactly like absent values.
///
/// # Example
/// ```
/// use roster_api::domain::search::MemberSearchCondition;
///
/// let condition = MemberSearchCondition {
///     team_name: Some("team2".to_string()),
///     age_goe: Some(35),
///     age_loe: Some(45),
///     ..Default::default()
/// };
/// assert!(condition.username.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchCondition {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub age_goe: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// Returns true when no field would contribute a predicate
    pub fn is_unconstrained(&self) -> bool {
        crate::domain::query::search_predicates(self).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_json() {
        let condition: MemberSearchCondition = serde_json::from_str(
            r#"{"username":"member1","teamName":"team1","ageGoe":10,"ageLoe":20}"#,
        )
        .unwrap();

        assert_eq!(condition.username.as_deref(), Some("member1"));
        assert_eq!(condition.team_name.as_deref(), Some("team1"));
        assert_eq!(condition.age_goe, Some(10));
        assert_eq!(condition.age_loe, Some(20));
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let condition: MemberSearchCondition = serde_json::from_str("{}").unwrap();
        assert_eq!(condition, MemberSearchCondition::default());
        assert!(condition.is_unconstrained());
    }

    #[test]
    fn textual_ages_are_parsed() {
        let condition: MemberSearchCondition =
            serde_json::from_str(r#"{"ageGoe":"35","ageLoe":""}"#).unwrap();

        assert_eq!(condition.age_goe, Some(35));
        assert_eq!(condition.age_loe, None);
    }

    #[test]
    fn unparsable_age_is_rejected() {
        let result: Result<MemberSearchCondition, _> =
            serde_json::from_str(r#"{"ageGoe":"old"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn blank_username_is_unconstrained() {
        let condition = MemberSearchCondition {
            username: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(condition.is_unconstrained());
    }
}
