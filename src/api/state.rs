use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresMemberRepository, PostgresTeamRepository,
};

/// Shared handler state: the repositories every request works against
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberRepository>,
    pub teams: Arc<dyn TeamRepository>,
}

impl AppState {
    /// Repositories backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            members: Arc::new(PostgresMemberRepository::new(pool.clone())),
            teams: Arc::new(PostgresTeamRepository::new(pool)),
        }
    }

    /// Both repositories backed by one shared in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            members: store.clone(),
            teams: store,
        }
    }
}
