use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::member_team_query::{
    member_teams_count_query, member_teams_page_query, member_teams_query, PAGE_SNAPSHOT,
};
use crate::domain::member::Member;
use crate::domain::query::Predicate;
use crate::domain::repositories::{MemberRepository, RepositoryResult};
use crate::domain::search::{MemberTeamDto, Page, PageRequest};

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
}

impl From<MemberRow> for Member {
    fn from(r: MemberRow) -> Self {
        Member::from_persistence(r.id, r.username, r.age, r.team_id)
    }
}

#[derive(sqlx::FromRow)]
struct MemberTeamRow {
    member_id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
    team_name: Option<String>,
}

impl From<MemberTeamRow> for MemberTeamDto {
    fn from(r: MemberTeamRow) -> Self {
        MemberTeamDto {
            member_id: r.member_id,
            username: r.username,
            age: r.age,
            team_id: r.team_id,
            team_name: r.team_name,
        }
    }
}

/// PostgreSQL implementation of MemberRepository
///
/// Entity lookups use plain SQLx queries; searches are assembled at runtime
/// with `QueryBuilder` so only the populated predicates reach the database.
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Creates a new PostgresMemberRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &Member) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO members (id, username, age, team_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                age = EXCLUDED.age,
                team_id = EXCLUDED.team_id
            "#,
        )
        .bind(member.id())
        .bind(member.username())
        .bind(member.age())
        .bind(member.team_id())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, username, age, team_id
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Member::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, username, age, team_id
            FROM members
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, username, age, team_id
            FROM members
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, username, age, team_id
            FROM members
            WHERE team_id = $1
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn select_member_teams(
        &self,
        predicates: &[Predicate],
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        let mut qb = member_teams_query(predicates);
        let rows: Vec<MemberTeamDto> = qb
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(MemberTeamDto::from)
            .collect();

        tracing::debug!(
            predicates = predicates.len(),
            rows = rows.len(),
            "member search executed"
        );

        Ok(rows)
    }

    async fn select_member_teams_page(
        &self,
        predicates: &[Predicate],
        page: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(PAGE_SNAPSHOT).execute(&mut *tx).await?;

        let mut content_qb = member_teams_page_query(predicates, page);
        let content: Vec<MemberTeamDto> = content_qb
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .map(MemberTeamDto::from)
            .collect();

        let mut count_qb = member_teams_count_query(predicates);
        let (total,): (i64,) = count_qb.build_query_as().fetch_one(&mut *tx).await?;

        tx.commit().await?;

        tracing::debug!(
            predicates = predicates.len(),
            rows = content.len(),
            total,
            "member page search executed"
        );

        Ok(Page::new(content, total.max(0) as u64, page))
    }
}
