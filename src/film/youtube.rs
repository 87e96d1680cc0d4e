//! YouTube video id extraction and the URLs derived from an id.

use url::Url;

const ID_LEN: usize = 11;

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_video_id(s: &str) -> bool {
    s.len() == ID_LEN && s.chars().all(is_id_char)
}

/// Extract an 11-character video id from a bare id or a YouTube URL.
///
/// Recognized URL forms: `youtu.be/<id>`, `watch?v=<id>`, `/embed/<id>`,
/// `/shorts/<id>` and `/live/<id>`. A string that does not parse as a URL
/// falls back to its first 11-character id run; URL parse errors never
/// surface.
pub fn video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if is_video_id(input) {
        return Some(input.to_string());
    }
    match Url::parse(input) {
        Ok(url) => from_url(&url),
        Err(_) => first_id_run(input),
    }
}

fn from_url(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_ascii_lowercase();
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    if host == "youtu.be" || host.ends_with(".youtu.be") {
        return segments.next().and_then(id_prefix);
    }
    if !(host == "youtube.com"
        || host.ends_with(".youtube.com")
        || host == "youtube-nocookie.com"
        || host.ends_with(".youtube-nocookie.com"))
    {
        return None;
    }

    if let Some((_, v)) = url.query_pairs().find(|(k, _)| k == "v") {
        if let Some(id) = id_prefix(&v) {
            return Some(id);
        }
    }
    match (segments.next(), segments.next()) {
        (Some("embed" | "shorts" | "live" | "v"), Some(id)) => id_prefix(id),
        _ => None,
    }
}

/// Leading 11 id characters of a path segment or query value.
fn id_prefix(s: &str) -> Option<String> {
    let candidate: String = s.chars().take(ID_LEN).collect();
    is_video_id(&candidate).then_some(candidate)
}

fn first_id_run(s: &str) -> Option<String> {
    let mut run = String::new();
    for c in s.chars() {
        if is_id_char(c) {
            run.push(c);
            if run.len() == ID_LEN {
                return Some(run);
            }
        } else {
            run.clear();
        }
    }
    None
}

/// Highest-resolution thumbnail; not every video has one.
pub fn thumbnail_max(id: &str) -> String {
    format!("https://i.ytimg.com/vi/{id}/maxresdefault.jpg")
}

/// Thumbnail that always exists, used when the max-res one fails to load.
pub fn thumbnail_fallback(id: &str) -> String {
    format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg")
}

/// Live player URL, autoplaying once the visitor asked for it.
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{id}?autoplay=1&rel=0&playsinline=1")
}

pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}
