use serde::{Deserialize, Deserializer, Serialize};

use super::query_value::blank_as_none;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Offset/limit window over an ordered search result
///
/// A missing or empty `offset`/`limit` falls back to the default window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default, deserialize_with = "offset_or_default")]
    offset: u32,
    #[serde(default = "default_limit", deserialize_with = "limit_or_default")]
    limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn offset_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let offset: Option<u32> = blank_as_none(deserializer)?;
    Ok(offset.unwrap_or(0))
}

fn limit_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let limit: Option<u32> = blank_as_none(deserializer)?;
    Ok(limit.unwrap_or_else(default_limit))
}

impl PageRequest {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Requested page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> u32 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the total number of matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: u64,
    pub offset: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            content,
            total,
            offset: request.offset(),
            limit: request.limit(),
        }
    }
}
