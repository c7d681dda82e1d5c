//! Video URL recognition.
//!
//! The backend derives thumbnails only from YouTube links in three shapes:
//! `watch?v=<id>`, `youtu.be/<id>`, and `youtube.com/embed/<id>`. Checking
//! the same shapes here lets the add form reject a bad link before any
//! request is made.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

/// Extract the YouTube video id from `url`, if it has one.
#[must_use]
pub fn youtube_id(url: &str) -> Option<&str> {
    query_param_v(url)
        .or_else(|| segment_after(url, "youtu.be/", '?'))
        .or_else(|| segment_after(url, "youtube.com/embed/", '?'))
}

fn query_param_v(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("v="))
        .map(|id| id.split('#').next().unwrap_or(id))
        .filter(|id| !id.is_empty())
}

fn segment_after<'a>(url: &'a str, marker: &str, stop: char) -> Option<&'a str> {
    let start = url.find(marker)? + marker.len();
    let rest = &url[start..];
    let id = rest.split(stop).next().unwrap_or(rest);
    (!id.is_empty()).then_some(id)
}
