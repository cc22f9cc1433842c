// API layer module (HTTP adapter over the repositories)

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
