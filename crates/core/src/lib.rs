//! Likemetric core library.
//!
//! Pure domain logic for the widget delivery service: field sanitization,
//! row normalization, video URL rewriting, and the embed script emitter.
//! No I/O lives here; everything is total and synchronous so it can be
//! unit-tested without a database or HTTP stack.

pub mod normalize;
pub mod sanitize;
pub mod script;
pub mod video_url;
pub mod widget;
