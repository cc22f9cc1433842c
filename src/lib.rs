//! Roster API Library
//!
//! Members, teams, and a dynamic member search: any subset of search fields
//! becomes a conjunction of predicates over a member LEFT JOIN team query,
//! projected into flat [`MemberTeamDto`](domain::search::MemberTeamDto) rows.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
