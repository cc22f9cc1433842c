// Table bootstrap for the Postgres store

use sqlx::{Executor, PgPool};

/// DDL for the members/teams schema; safe to run repeatedly
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS teams (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS members (
    id UUID PRIMARY KEY,
    username TEXT,
    age INTEGER NOT NULL,
    team_id UUID REFERENCES teams (id)
);

CREATE INDEX IF NOT EXISTS members_team_id_idx ON members (team_id);
"#;

/// Creates the tables if they are missing
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    pool.execute(SCHEMA_SQL).await?;
    tracing::info!("Database schema ready");
    Ok(())
}
