//! Video provider URL recognition and embed rewriting.
//!
//! The builder stores whatever URL the marketer pasted. Known provider
//! shapes (YouTube, Vimeo) are rewritten to their embeddable iframe URLs;
//! any other valid URL is treated as a direct video file and rendered in a
//! native `<video>` element.

use std::sync::OnceLock;

use regex::Regex;

use crate::sanitize::is_valid_url;

/// How a video URL should be rendered inside the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoEmbed {
    /// Provider embed URL for an `<iframe>`.
    Iframe(String),
    /// Direct video file URL for a native `<video>` element.
    File(String),
    /// No usable video; the media block is omitted entirely.
    None,
}

fn youtube_watch() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/watch\?(?:.*&)?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{6,})").unwrap()
    })
}

fn vimeo_video() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"vimeo\.com/(?:video/)?(\d+)").unwrap())
}

/// Classify a raw video URL into an embed strategy.
///
/// `https://youtu.be/ID`, `https://www.youtube.com/watch?v=ID`, and
/// already-embedded `youtube.com/embed/ID` all normalize to
/// `https://www.youtube.com/embed/ID`. `vimeo.com/123` becomes
/// `https://player.vimeo.com/video/123`.
pub fn classify(video_url: &str) -> VideoEmbed {
    if video_url.is_empty() || !is_valid_url(video_url) {
        return VideoEmbed::None;
    }
    if let Some(caps) = youtube_watch().captures(video_url) {
        return VideoEmbed::Iframe(format!("https://www.youtube.com/embed/{}", &caps[1]));
    }
    if let Some(caps) = vimeo_video().captures(video_url) {
        return VideoEmbed::Iframe(format!("https://player.vimeo.com/video/{}", &caps[1]));
    }
    VideoEmbed::File(video_url.to_string())
}
