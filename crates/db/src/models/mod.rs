//! Database row models.

pub mod widget;
