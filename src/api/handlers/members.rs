use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::member::Member;
use crate::domain::query::{strategy, SearchStrategy};
use crate::domain::search::{MemberSearchCondition, MemberTeamDto, Page, PageRequest};

/// Optional query parameter selecting how the search is composed
#[derive(Debug, Default, Deserialize)]
pub struct StrategyParams {
    #[serde(default, deserialize_with = "strategy::blank_as_default")]
    pub strategy: SearchStrategy,
}

/// Request body for creating a member
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Uuid>,
}

/// Request body for moving a member to another team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTeamRequest {
    pub team_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: Uuid,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Uuid>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id(),
            username: member.username().map(str::to_string),
            age: member.age(),
            team_id: member.team_id(),
        }
    }
}

/// Search members joined with their teams
///
/// GET /api/members?username=&teamName=&ageGoe=&ageLoe=&strategy=
pub async fn search_members(
    State(state): State<AppState>,
    condition: Result<Query<MemberSearchCondition>, QueryRejection>,
    params: Result<Query<StrategyParams>, QueryRejection>,
) -> Result<Json<Vec<MemberTeamDto>>, ApiError> {
    let Query(condition) = condition?;
    let Query(params) = params?;
    tracing::debug!(?condition, strategy = ?params.strategy, "Searching members");

    let result = state
        .members
        .search_with(&condition, params.strategy)
        .await?;

    Ok(Json(result))
}

/// One page of a member search
///
/// GET /api/members/page?...&offset=&limit=
pub async fn search_members_page(
    State(state): State<AppState>,
    condition: Result<Query<MemberSearchCondition>, QueryRejection>,
    page: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<Page<MemberTeamDto>>, ApiError> {
    let Query(condition) = condition?;
    let Query(page) = page?;
    let result = state.members.search_page(&condition, &page).await?;
    Ok(Json(result))
}

/// Create a new member, optionally inside a team
///
/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    req: Result<Json<CreateMemberRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let Json(req) = req?;
    let mut member = match req.username {
        Some(username) => Member::new(username, req.age),
        None => Member::unnamed(req.age),
    };

    if let Some(team_id) = req.team_id {
        let team = state
            .teams
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", team_id)))?;
        member.change_team(&team);
    }

    state.members.save(&member).await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(&member))))
}

/// Get a member by ID
///
/// GET /api/members/:id
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .members
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", id)))?;

    Ok(Json(MemberResponse::from(&member)))
}

/// Move a member to another team
///
/// PUT /api/members/:id/team
pub async fn change_member_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    req: Result<Json<ChangeTeamRequest>, JsonRejection>,
) -> Result<Json<MemberResponse>, ApiError> {
    let Json(req) = req?;
    let mut member = state
        .members
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", id)))?;

    let team = state
        .teams
        .find_by_id(req.team_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", req.team_id)))?;

    member.change_team(&team);
    state.members.save(&member).await?;

    tracing::info!(member_id = %id, team_id = %team.id(), "Member changed team");

    Ok(Json(MemberResponse::from(&member)))
}
