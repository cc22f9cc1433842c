use uuid::Uuid;

use crate::domain::team::Team;

/// Member entity
///
/// Belongs to at most one team. The team is referenced by ID only, so a
/// member never owns or borrows its [`Team`].
///
/// # Invariants
/// - The ID is generated once and never changes
/// - Only [`Member::change_team`] and [`Member::leave_team`] mutate a member
///
/// # Example
/// ```
/// use roster_api::domain::member::Member;
/// use roster_api::domain::team::Team;
///
/// let team = Team::new("team1");
/// let mut member = Member::new("member1", 10);
/// assert_eq!(member.team_id(), None);
///
/// member.change_team(&team);
/// assert_eq!(member.team_id(), Some(team.id()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
}

impl Member {
    /// Creates a member without a team
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    /// Creates a member whose username is unknown
    pub fn unnamed(age: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: None,
            age,
            team_id: None,
        }
    }

    /// Creates a member already assigned to `team`
    pub fn with_team(username: impl Into<String>, age: i32, team: &Team) -> Self {
        let mut member = Self::new(username, age);
        member.change_team(team);
        member
    }

    /// Reassigns the member to `team`
    pub fn change_team(&mut self, team: &Team) {
        self.team_id = Some(team.id());
    }

    /// Removes the member from its team, if any
    pub fn leave_team(&mut self) {
        self.team_id = None;
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    /// Reconstructs a Member from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        username: Option<String>,
        age: i32,
        team_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            username,
            age,
            team_id,
        }
    }
}
