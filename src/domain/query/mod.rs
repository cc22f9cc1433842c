// Dynamic query composition
// Turns optional search criteria into predicates over the member/team join

pub mod builder;
pub mod conditions;
pub mod predicate;
pub mod strategy;

pub use builder::BooleanBuilder;
pub use conditions::{
    age_between, age_goe, age_loe, search_conjunction, search_predicates,
    team_name_eq, username_eq,
};
pub use predicate::{CompareOp, Field, Predicate, Row, Value};
pub use strategy::SearchStrategy;
