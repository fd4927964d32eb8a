//! Data access repositories.

mod widget_repo;

pub use widget_repo::WidgetRepo;
