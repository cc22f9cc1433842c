use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::member::Member;
use crate::domain::query::{Field, Predicate, Row, Value};
use crate::domain::repositories::{
    MemberRepository, RepositoryError, RepositoryResult, TeamRepository,
};
use crate::domain::search::{MemberTeamDto, Page, PageRequest};
use crate::domain::team::Team;

/// In-process store implementing both repositories
///
/// Rows are kept in insertion order, which is the "store order" searches
/// return. Searches evaluate the same [`Predicate`] trees the Postgres
/// adapter renders to SQL, over a left join of members to teams.
///
/// Saving a member whose team does not exist fails the way a foreign key
/// would.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    teams: Vec<Team>,
    members: Vec<Member>,
}

impl StoreState {
    fn team_index(&self) -> HashMap<Uuid, &Team> {
        self.teams.iter().map(|team| (team.id(), team)).collect()
    }

    /// Every member joined to its team (or to nothing), filtered
    fn joined(&self, predicates: &[Predicate]) -> Vec<MemberTeamDto> {
        let teams = self.team_index();
        self.members
            .iter()
            .map(|member| JoinedRow {
                member,
                team: member.team_id().and_then(|id| teams.get(&id).copied()),
            })
            .filter(|row| predicates.iter().all(|p| p.eval(row)))
            .map(JoinedRow::project)
            .collect()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

struct JoinedRow<'a> {
    member: &'a Member,
    team: Option<&'a Team>,
}

impl JoinedRow<'_> {
    fn project(self) -> MemberTeamDto {
        MemberTeamDto {
            member_id: self.member.id(),
            username: self.member.username().map(str::to_string),
            age: self.member.age(),
            team_id: self.team.map(Team::id),
            team_name: self.team.map(|team| team.name().to_string()),
        }
    }
}

impl Row for JoinedRow<'_> {
    fn value(&self, field: Field) -> Option<Value> {
        match field {
            Field::MemberId => Some(Value::Uuid(self.member.id())),
            Field::Username => self.member.username().map(Value::from),
            Field::Age => Some(Value::Int(self.member.age())),
            Field::TeamId => self.team.map(|team| Value::Uuid(team.id())),
            Field::TeamName => self.team.map(|team| Value::from(team.name())),
        }
    }
}

fn upsert<T, F>(rows: &mut Vec<T>, row: T, same: F)
where
    F: Fn(&T) -> bool,
{
    match rows.iter_mut().find(|existing| same(existing)) {
        Some(existing) => *existing = row,
        None => rows.push(row),
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn save(&self, team: &Team) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        upsert(&mut state.teams, team.clone(), |t| t.id() == team.id());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let state = self.state.read().await;
        Ok(state.teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        Ok(self.state.read().await.teams.clone())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Team>> {
        let state = self.state.read().await;
        Ok(state
            .teams
            .iter()
            .filter(|t| t.name() == name)
            .cloned()
            .collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.state.read().await.teams.len() as u64)
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn save(&self, member: &Member) -> RepositoryResult<()> {
        let mut state = self.state.write().await;

        if let Some(team_id) = member.team_id() {
            if !state.teams.iter().any(|t| t.id() == team_id) {
                return Err(RepositoryError::not_found(format!("Team {}", team_id)));
            }
        }

        upsert(&mut state.members, member.clone(), |m| m.id() == member.id());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>> {
        let state = self.state.read().await;
        Ok(state.members.iter().find(|m| m.id() == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Member>> {
        Ok(self.state.read().await.members.clone())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>> {
        let state = self.state.read().await;
        Ok(state
            .members
            .iter()
            .filter(|m| m.username() == Some(username))
            .cloned()
            .collect())
    }

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Member>> {
        let state = self.state.read().await;
        Ok(state
            .members
            .iter()
            .filter(|m| m.team_id() == Some(team_id))
            .cloned()
            .collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.state.read().await.members.len() as u64)
    }

    async fn select_member_teams(
        &self,
        predicates: &[Predicate],
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        let rows = self.state.read().await.joined(predicates);

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
        let mut rows = self.state.read().await.joined(predicates);
        let total = rows.len() as u64;

        // username ASC NULLS LAST, then id
        rows.sort_by(|a, b| {
            (a.username.is_none(), &a.username, a.member_id).cmp(&(
                b.username.is_none(),
                &b.username,
                b.member_id,
            ))
        });

        let content = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(Page::new(content, total, page))
    }
}
