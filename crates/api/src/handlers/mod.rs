//! HTTP handlers.

pub mod embed;
pub mod health;
pub mod track;
