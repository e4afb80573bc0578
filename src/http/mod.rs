//! HTTP surface over [`AsteroidService`](crate::service::AsteroidService).

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
