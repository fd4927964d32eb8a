//! Likemetric API server library.
//!
//! Exposes the building blocks (config, state, error handling, router,
//! handlers) so integration tests and the binary entrypoint share the same
//! application construction path.

pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
