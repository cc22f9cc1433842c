use crate::domain::member::Member;
use crate::domain::repositories::{MemberRepository, RepositoryResult, TeamRepository};
use crate::domain::team::Team;

pub const SAMPLE_MEMBER_COUNT: i32 = 100;

/// Loads a demo data set: `teamA`, `teamB` and `member0..member99`
///
/// Member `i` is `i` years old and joins `teamA` when `i` is even,
/// `teamB` otherwise.
pub async fn seed_sample_data(
    teams: &dyn TeamRepository,
    members: &dyn MemberRepository,
) -> RepositoryResult<()> {
    let team_a = Team::new("teamA");
    let team_b = Team::new("teamB");
    teams.save(&team_a).await?;
    teams.save(&team_b).await?;

    for i in 0..SAMPLE_MEMBER_COUNT {
        let team = if i % 2 == 0 { &team_a } else { &team_b };
        members
            .save(&Member::with_team(format!("member{}", i), i, team))
            .await?;
    }

    tracing::info!(
        teams = 2,
        members = SAMPLE_MEMBER_COUNT,
        "Sample data loaded"
    );

    Ok(())
}
