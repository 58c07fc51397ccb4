//! API layer - HTTP endpoints

pub mod courses;
pub mod health;
pub mod router;
pub mod state;
pub mod stats;
pub mod students;
pub mod types;

pub use router::create_router_with_state;
pub use state::AppState;
