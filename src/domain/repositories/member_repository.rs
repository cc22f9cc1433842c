use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::member::Member;
use crate::domain::query::{search_predicates, Predicate, SearchStrategy};
use crate::domain::search::{MemberSearchCondition, MemberTeamDto, Page, PageRequest};

/// Repository trait for Member entities and member/team searches
///
/// Implementors provide storage primitives plus the two query executors
/// (`select_member_teams` and `select_member_teams_page`). The search
/// operations are defined on top of those and shared by every store.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a member (insert or update)
    ///
    /// Saving again after [`Member::change_team`] persists the new team.
    async fn save(&self, member: &Member) -> RepositoryResult<()>;

    /// Find a member by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>>;

    /// Find every member
    async fn find_all(&self) -> RepositoryResult<Vec<Member>>;

    /// Find all members with exactly this username
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>>;

    /// Members currently assigned to a team
    ///
    /// This is the team's member collection; teams do not store one.
    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Member>>;

    /// Number of stored members
    async fn count(&self) -> RepositoryResult<u64>;

    /// Runs the member LEFT JOIN team projection filtered by the AND of
    /// `predicates`
    ///
    /// An empty slice, or one holding only match-all predicates, returns
    /// every member. Row order is whatever the store yields.
    async fn select_member_teams(
        &self,
        predicates: &[Predicate],
    ) -> RepositoryResult<Vec<MemberTeamDto>>;

    /// Same projection and filter as [`select_member_teams`], ordered by
    /// username (nulls last) then member ID and cut to one page
    ///
    /// [`select_member_teams`]: MemberRepository::select_member_teams
    async fn select_member_teams_page(
        &self,
        predicates: &[Predicate],
        page: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>>;

    /// Search using one predicate per populated field
    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        self.search_with(condition, SearchStrategy::PredicateList)
            .await
    }

    /// Search using a single accumulated conjunction
    async fn search_by_builder(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        self.search_with(condition, SearchStrategy::Builder).await
    }

    async fn search_with(
        &self,
        condition: &MemberSearchCondition,
        strategy: SearchStrategy,
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        let predicates = strategy.compose(condition);
        self.select_member_teams(&predicates).await
    }

    /// Paged search; `total` counts every match, not just this page
    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: &PageRequest,
    ) -> RepositoryResult<Page<MemberTeamDto>> {
        let predicates = search_predicates(condition);
        self.select_member_teams_page(&predicates, page).await
    }
}
