use uuid::Uuid;

/// Team entity
///
/// A team is just an identity and a name. Its members are not stored on
/// the team; they are looked up through
/// [`MemberRepository::find_by_team`](crate::domain::repositories::MemberRepository::find_by_team).
///
/// # Example
/// ```
/// use roster_api::domain::team::Team;
///
/// let team = Team::new("team1");
/// assert_eq!(team.name(), "team1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: String,
}

impl Team {
    /// Creates a new team with a freshly generated ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}
