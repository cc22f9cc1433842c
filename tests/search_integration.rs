//! Integration tests for member search
//!
//! These tests run the search operations against the in-memory store and
//! check the behaviour every store must share: left-join projection,
//! elision of absent criteria, and agreement between the builder and
//! predicate-list strategies.

use std::collections::HashSet;

use roster_api::domain::member::Member;
use roster_api::domain::query::{age_between, age_goe, age_loe, Predicate, SearchStrategy};
use roster_api::domain::repositories::{MemberRepository, TeamRepository};
use roster_api::domain::search::{MemberSearchCondition, MemberTeamDto, PageRequest};
use roster_api::domain::team::Team;
use roster_api::infrastructure::repositories::InMemoryStore;

/// Store seeded with member1..member5 aged 10..50; the first three in team1,
/// the last two in team2
struct Fixture {
    store: InMemoryStore,
    team1: Team,
    team2: Team,
    members: Vec<Member>,
}

async fn setup_fixture() -> Fixture {
    let store = InMemoryStore::new();

    let mut members: Vec<Member> = (1..=5)
        .map(|i| Member::new(format!("member{}", i), i * 10))
        .collect();
    for member in &members {
        MemberRepository::save(&store, member)
            .await
            .expect("Failed to save member");
    }

    let team1 = Team::new("team1");
    let team2 = Team::new("team2");
    TeamRepository::save(&store, &team1)
        .await
        .expect("Failed to save team1");
    TeamRepository::save(&store, &team2)
        .await
        .expect("Failed to save team2");

    for (i, member) in members.iter_mut().enumerate() {
        member.change_team(if i < 3 { &team1 } else { &team2 });
        MemberRepository::save(&store, member)
            .await
            .expect("Failed to reassign member");
    }

    Fixture {
        store,
        team1,
        team2,
        members,
    }
}

fn as_set(rows: Vec<MemberTeamDto>) -> HashSet<MemberTeamDto> {
    rows.into_iter().collect()
}

fn usernames(rows: &[MemberTeamDto]) -> HashSet<String> {
    rows.iter().filter_map(|r| r.username.clone()).collect()
}

fn condition(
    username: Option<&str>,
    team_name: Option<&str>,
    age_goe: Option<i32>,
    age_loe: Option<i32>,
) -> MemberSearchCondition {
    MemberSearchCondition {
        username: username.map(str::to_string),
        team_name: team_name.map(str::to_string),
        age_goe,
        age_loe,
    }
}

#[tokio::test]
async fn test_search_with_team_and_age_range() {
    let fixture = setup_fixture().await;
    let condition = condition(None, Some("team2"), Some(35), Some(45));

    let result = fixture.store.search(&condition).await.unwrap();

    assert_eq!(result.len(), 1, "Only member4 is 35..=45 in team2");
    let row = &result[0];
    assert_eq!(row.member_id, fixture.members[3].id());
    assert_eq!(row.username.as_deref(), Some("member4"));
    assert_eq!(row.age, 40);
    assert_eq!(row.team_id, Some(fixture.team2.id()));
    assert_eq!(row.team_name.as_deref(), Some("team2"));
}

#[tokio::test]
async fn test_search_by_builder_with_team_and_age_range() {
    let fixture = setup_fixture().await;
    let condition = condition(None, Some("team2"), Some(35), Some(45));

    let result = fixture.store.search_by_builder(&condition).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].username.as_deref(), Some("member4"));
    assert_eq!(result[0].team_id, Some(fixture.team2.id()));
}

#[tokio::test]
async fn test_unconstrained_search_returns_every_member() {
    let fixture = setup_fixture().await;

    let result = fixture
        .store
        .search(&MemberSearchCondition::default())
        .await
        .unwrap();

    assert_eq!(result.len(), 5);
    for row in &result {
        let expected_team = if row.age <= 30 {
            &fixture.team1
        } else {
            &fixture.team2
        };
        assert_eq!(row.team_id, Some(expected_team.id()));
        assert_eq!(row.team_name.as_deref(), Some(expected_team.name()));
    }
}

#[tokio::test]
async fn test_strategies_return_identical_results() {
    let fixture = setup_fixture().await;

    let conditions = [
        MemberSearchCondition::default(),
        condition(Some("member1"), None, None, None),
        condition(None, Some("team1"), None, None),
        condition(None, None, Some(20), None),
        condition(None, None, None, Some(30)),
        condition(None, Some("team2"), Some(35), Some(45)),
        condition(Some("member3"), Some("team1"), Some(30), Some(30)),
        condition(Some(""), Some("  "), Some(-10), Some(1000)),
        condition(None, Some("no-such-team"), None, None),
        condition(None, None, Some(50), Some(10)),
    ];

    for condition in &conditions {
        let by_list = fixture.store.search(condition).await.unwrap();
        let by_builder = fixture.store.search_by_builder(condition).await.unwrap();

        assert_eq!(
            as_set(by_list),
            as_set(by_builder),
            "Strategies disagree for {:?}",
            condition
        );
    }
}

#[tokio::test]
async fn test_unknown_team_name_returns_nothing() {
    let fixture = setup_fixture().await;

    let result = fixture
        .store
        .search(&condition(None, Some("team3"), None, None))
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_member_without_team_is_left_joined() {
    let fixture = setup_fixture().await;
    let loner = Member::new("loner", 25);
    MemberRepository::save(&fixture.store, &loner).await.unwrap();

    let all = fixture
        .store
        .search(&MemberSearchCondition::default())
        .await
        .unwrap();
    let row = all
        .iter()
        .find(|r| r.member_id == loner.id())
        .expect("Member without team should still be listed");
    assert_eq!(row.team_id, None);
    assert_eq!(row.team_name, None);

    let by_age = fixture
        .store
        .search(&condition(None, None, Some(20), Some(30)))
        .await
        .unwrap();
    assert!(by_age.iter().any(|r| r.member_id == loner.id()));

    let by_team = fixture
        .store
        .search(&condition(None, Some("team1"), None, None))
        .await
        .unwrap();
    assert!(!by_team.iter().any(|r| r.member_id == loner.id()));
}

#[tokio::test]
async fn test_search_is_idempotent() {
    let fixture = setup_fixture().await;
    let condition = condition(None, None, Some(20), None);

    let first = fixture.store.search(&condition).await.unwrap();
    let second = fixture.store.search(&condition).await.unwrap();

    assert_eq!(as_set(first), as_set(second));
}

#[tokio::test]
async fn test_blank_strings_behave_like_absent() {
    let fixture = setup_fixture().await;

    for strategy in [SearchStrategy::PredicateList, SearchStrategy::Builder] {
        let absent = fixture
            .store
            .search_with(&condition(None, None, None, None), strategy)
            .await
            .unwrap();
        let empty = fixture
            .store
            .search_with(&condition(Some(""), Some(""), None, None), strategy)
            .await
            .unwrap();
        let whitespace = fixture
            .store
            .search_with(&condition(Some("   "), Some("\t"), None, None), strategy)
            .await
            .unwrap();

        assert_eq!(absent.len(), 5);
        assert_eq!(as_set(absent.clone()), as_set(empty));
        assert_eq!(as_set(absent), as_set(whitespace));
    }
}

#[tokio::test]
async fn test_username_filter_is_exact() {
    let fixture = setup_fixture().await;

    let result = fixture
        .store
        .search(&condition(Some("member"), None, None, None))
        .await
        .unwrap();
    assert!(result.is_empty(), "Username match must not be a prefix match");

    let result = fixture
        .store
        .search(&condition(Some("member2"), None, None, None))
        .await
        .unwrap();
    assert_eq!(usernames(&result), HashSet::from(["member2".to_string()]));
}

#[tokio::test]
async fn test_age_bounds_are_inclusive() {
    let fixture = setup_fixture().await;

    let result = fixture
        .store
        .search(&condition(None, None, Some(20), Some(40)))
        .await
        .unwrap();

    assert_eq!(
        usernames(&result),
        HashSet::from([
            "member2".to_string(),
            "member3".to_string(),
            "member4".to_string(),
        ])
    );
}

#[tokio::test]
async fn test_inverted_age_range_matches_nothing() {
    let fixture = setup_fixture().await;

    let result = fixture
        .store
        .search(&condition(None, None, Some(50), Some(10)))
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_age_between_matches_independent_bounds() {
    let fixture = setup_fixture().await;

    for (loe, goe) in [
        (Some(45), Some(35)),
        (Some(25), None),
        (None, Some(25)),
        (None, None),
    ] {
        let combined: Vec<Predicate> = age_between(loe, goe).into_iter().collect();
        let independent: Vec<Predicate> =
            [age_loe(loe), age_goe(goe)].into_iter().flatten().collect();

        let by_between = fixture.store.select_member_teams(&combined).await.unwrap();
        let by_bounds = fixture
            .store
            .select_member_teams(&independent)
            .await
            .unwrap();

        assert_eq!(as_set(by_between), as_set(by_bounds));
    }
}

#[tokio::test]
async fn test_team_members_are_derived_from_assignments() {
    let mut fixture = setup_fixture().await;

    let team1_members = fixture.store.find_by_team(fixture.team1.id()).await.unwrap();
    assert_eq!(team1_members.len(), 3);

    let moved = &mut fixture.members[0];
    moved.change_team(&fixture.team2);
    MemberRepository::save(&fixture.store, moved).await.unwrap();

    let team1_members = fixture.store.find_by_team(fixture.team1.id()).await.unwrap();
    let team2_members = fixture.store.find_by_team(fixture.team2.id()).await.unwrap();
    assert_eq!(team1_members.len(), 2);
    assert_eq!(team2_members.len(), 3);
    assert!(team2_members.iter().any(|m| m.id() == fixture.members[0].id()));
}

#[tokio::test]
async fn test_crud_fixtures_round_trip() {
    let fixture = setup_fixture().await;
    let store = &fixture.store;

    assert_eq!(MemberRepository::count(store).await.unwrap(), 5);
    assert_eq!(TeamRepository::count(store).await.unwrap(), 2);

    let member = &fixture.members[0];
    let found = MemberRepository::find_by_id(store, member.id())
        .await
        .unwrap()
        .expect("Member should be found");
    assert_eq!(&found, member);

    let all = MemberRepository::find_all(store).await.unwrap();
    assert_eq!(all.len(), 5);

    let by_name = store.find_by_username("member1").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].team_id(), Some(fixture.team1.id()));

    let teams = store.find_by_name("team2").await.unwrap();
    assert_eq!(teams, vec![fixture.team2.clone()]);
}

#[tokio::test]
async fn test_search_page_orders_and_counts() {
    let fixture = setup_fixture().await;
    let condition = condition(None, None, Some(20), None);

    let first = fixture
        .store
        .search_page(&condition, &PageRequest::new(0, 2))
        .await
        .unwrap();
    let second = fixture
        .store
        .search_page(&condition, &PageRequest::new(2, 2))
        .await
        .unwrap();

    assert_eq!(first.total, 4);
    assert_eq!(second.total, 4);
    let names: Vec<_> = first
        .content
        .iter()
        .chain(second.content.iter())
        .filter_map(|r| r.username.clone())
        .collect();
    assert_eq!(names, vec!["member2", "member3", "member4", "member5"]);
    assert_eq!(second.offset, 2);
    assert_eq!(second.limit, 2);
}
