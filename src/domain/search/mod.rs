// Search input and output values

pub mod condition;
pub mod dto;
pub mod page;
mod query_value;

pub use condition::MemberSearchCondition;
pub use dto::MemberTeamDto;
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
