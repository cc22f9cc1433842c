use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::team::Team;

/// Repository trait for Team entities
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> RepositoryResult<()>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>>;

    /// Find every team
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Find all teams with exactly this name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Team>>;

    /// Number of stored teams
    async fn count(&self) -> RepositoryResult<u64>;
}
