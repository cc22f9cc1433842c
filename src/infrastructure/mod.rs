// Infrastructure layer module
// Contains database adapters, schema bootstrap and sample data

pub mod repositories;
pub mod schema;
pub mod seed;
