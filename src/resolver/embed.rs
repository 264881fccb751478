use serde::Serialize;
use url::Url;

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const VIMEO_EMBED_BASE: &str = "https://player.vimeo.com/video/";

/// Where a video slot should point and whether it needs an iframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedResolution {
    pub embed_url: String,
    pub is_embeddable: bool,
}

impl EmbedResolution {
    /// Play the URL natively, exactly as given.
    fn direct(raw: &str) -> Self {
        Self {
            embed_url: raw.to_string(),
            is_embeddable: false,
        }
    }

    fn provider(embed_url: String) -> Self {
        Self {
            embed_url,
            is_embeddable: true,
        }
    }
}

/// Rewrite YouTube and Vimeo links into their player embed form.
///
/// Anything else, including blank or unparsable input and provider links
/// without a usable video id, is echoed back unchanged as non-embeddable.
/// The id is the last path segment (or YouTube's `v` parameter), and it is
/// only used when it consists of `[A-Za-z0-9_-]`: `https://youtu.be/abc.def`
/// plays directly instead of being embedded.
pub fn resolve_embed_url(raw: &str) -> EmbedResolution {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return EmbedResolution::direct(raw);
    }

    let Ok(parsed) = Url::parse(trimmed) else {
        return EmbedResolution::direct(raw);
    };
    let Some(host) = parsed.host_str().map(str::to_ascii_lowercase) else {
        return EmbedResolution::direct(raw);
    };

    let embed_url = if host_matches(&host, "youtu.be") {
        last_path_segment(&parsed).map(|id| format!("{YOUTUBE_EMBED_BASE}{id}"))
    } else if host_matches(&host, "youtube.com") {
        query_param(&parsed, "v").map(|id| format!("{YOUTUBE_EMBED_BASE}{id}"))
    } else if host_matches(&host, "vimeo.com") {
        last_path_segment(&parsed).map(|id| format!("{VIMEO_EMBED_BASE}{id}"))
    } else {
        None
    };

    match embed_url {
        Some(url) => EmbedResolution::provider(url),
        None => EmbedResolution::direct(raw),
    }
}

/// `host` is `domain` itself or one of its subdomains.
fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn last_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .filter(|segment| is_video_id(segment))
        .map(str::to_string)
}

fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| is_video_id(value))
}

/// Provider ids are URL-safe tokens; anything else is not spliced into an embed URL.
fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtu_be_short_link() {
        let resolved = resolve_embed_url("https://youtu.be/abc123");
        assert_eq!(resolved.embed_url, "https://www.youtube.com/embed/abc123");
        assert!(resolved.is_embeddable);
    }

    #[test]
    fn test_id_with_punctuation_plays_directly() {
        let resolved = resolve_embed_url("https://youtu.be/abc.def");
        assert_eq!(resolved.embed_url, "https://youtu.be/abc.def");
        assert!(!resolved.is_embeddable);
    }

    #[test]
    fn test_youtu_be_ignores_query() {
        let resolved = resolve_embed_url("https://youtu.be/abc123?si=tracking");
        assert_eq!(resolved.embed_url, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_youtube_watch_link() {
        let resolved = resolve_embed_url("https://www.youtube.com/watch?v=xyz789&t=10");
        assert_eq!(
            resolved,
            EmbedResolution {
                embed_url: "https://www.youtube.com/embed/xyz789".to_string(),
                is_embeddable: true,
            }
        );
    }

    #[test]
    fn test_youtube_without_video_id_is_direct() {
        let raw = "https://www.youtube.com/channel/UC123";
        let resolved = resolve_embed_url(raw);
        assert_eq!(resolved.embed_url, raw);
        assert!(!resolved.is_embeddable);
    }

    #[test]
    fn test_vimeo_link() {
        let resolved = resolve_embed_url("https://vimeo.com/555444");
        assert_eq!(resolved.embed_url, "https://player.vimeo.com/video/555444");
        assert!(resolved.is_embeddable);
    }

    #[test]
    fn test_vimeo_trailing_slash() {
        let resolved = resolve_embed_url("https://vimeo.com/555444/");
        assert_eq!(resolved.embed_url, "https://player.vimeo.com/video/555444");
    }

    #[test]
    fn test_direct_file_is_not_embeddable() {
        let resolved = resolve_embed_url("https://example.com/clip.mp4");
        assert_eq!(resolved.embed_url, "https://example.com/clip.mp4");
        assert!(!resolved.is_embeddable);
    }

    #[test]
    fn test_lookalike_host_is_not_a_provider() {
        let raw = "https://notyoutube.com/watch?v=abc";
        let resolved = resolve_embed_url(raw);
        assert_eq!(resolved.embed_url, raw);
        assert!(!resolved.is_embeddable);
    }

    #[test]
    fn test_unparsable_input_is_echoed() {
        let resolved = resolve_embed_url("not a url at all");
        assert_eq!(resolved.embed_url, "not a url at all");
        assert!(!resolved.is_embeddable);
    }

    #[test]
    fn test_blank_input_is_echoed() {
        let resolved = resolve_embed_url("   ");
        assert_eq!(resolved.embed_url, "   ");
        assert!(!resolved.is_embeddable);
    }

    #[test]
    fn test_unsafe_id_is_not_spliced() {
        let resolved = resolve_embed_url("https://www.youtube.com/watch?v=%22%3E%3Cscript%3E");
        assert!(!resolved.is_embeddable);
    }
}
