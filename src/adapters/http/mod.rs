//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod health;
pub mod saw;

use axum::Router;

// Re-export key types for convenience
pub use health::health_router;
pub use saw::{saw_router, SawAppState};

/// Full application router: SAW endpoints plus health check.
pub fn app_router(state: SawAppState) -> Router {
    saw_router()
        .merge(health_router::<SawAppState>())
        .with_state(state)
}
