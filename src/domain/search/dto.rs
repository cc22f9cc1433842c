use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One member joined to its team, flattened for reporting
///
/// `team_id` and `team_name` are `None` for a member without a team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: Uuid,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys_and_nulls() {
        let member_id = Uuid::new_v4();
        let dto = MemberTeamDto {
            member_id,
            username: Some("member1".to_string()),
            age: 10,
            team_id: None,
            team_name: None,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["memberId"], member_id.to_string());
        assert_eq!(json["username"], "member1");
        assert_eq!(json["age"], 10);
        assert!(json["teamId"].is_null());
        assert!(json["teamName"].is_null());
    }
}
