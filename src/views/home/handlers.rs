use dioxus::prelude::*;
use url::Url;

use crate::api::{fetch_formats, VideoFormat};
use crate::views::home::platforms::{sleep_ms, submit_download_form};

/// How long a format stays marked as downloading. The form POST gives no
/// completion signal, so this is purely a UI delay.
pub const DOWNLOADING_RESET_MS: u32 = 2_000;

const EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Reject links that would never produce a useful request.
pub fn validate_link(link: &str) -> Result<(), &'static str> {
    if link.trim().is_empty() {
        return Err("Please enter a YouTube link");
    }

    Ok(())
}

/// Derive the embeddable preview URL for a video link.
///
/// Links without a recognizable video id get no preview rather than a
/// malformed one; the format list still renders.
pub fn embed_preview_url(link: &str) -> Option<String> {
    video_id(link).map(|id| format!("{EMBED_BASE}/{id}"))
}

fn video_id(link: &str) -> Option<String> {
    let Ok(parsed) = Url::parse(link) else {
        // Not an absolute URL; fall back to a bare `v=` parameter.
        let (_, rest) = link.split_once("v=")?;
        let id = rest.split('&').next().unwrap_or_default();
        return (!id.is_empty()).then(|| id.to_string());
    };

    if let Some(id) = parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
    {
        return Some(id);
    }

    let host = parsed.host_str()?;
    let mut segments = parsed.path_segments()?;

    if host.ends_with("youtu.be") {
        let id = segments.next()?;
        return (!id.is_empty()).then(|| id.to_string());
    }

    match segments.next()? {
        "embed" | "shorts" | "live" | "v" => {
            let id = segments.next()?;
            (!id.is_empty()).then(|| id.to_string())
        }
        _ => None,
    }
}

/// Run the format discovery request and settle the page state.
///
/// The caller has already set the loading flag and cleared the previous
/// results; this clears the flag again whichever way the request ends.
pub fn run_discovery(
    link: String,
    formats: &Signal<Vec<VideoFormat>>,
    preview_url: &Signal<Option<String>>,
    error: &Signal<Option<String>>,
    loading: &Signal<bool>,
) {
    spawn({
        let mut formats = formats.clone();
        let mut preview_url = preview_url.clone();
        let mut error = error.clone();
        let mut loading = loading.clone();

        async move {
            tracing::info!("requesting formats for {link}");

            match fetch_formats(&link).await {
                Ok(list) => {
                    tracing::info!("received {} formats", list.len());
                    preview_url.set(embed_preview_url(&link));
                    formats.set(list);
                }
                Err(err) => {
                    tracing::warn!("format discovery failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }

            loading.set(false);
        }
    });
}

/// Mark a format as downloading and hand its form POST to the browser.
pub fn start_download(format_id: String, downloading_format: &Signal<Option<String>>) {
    let mut downloading_format = downloading_format.clone();
    downloading_format.set(Some(format_id.clone()));

    if let Err(err) = submit_download_form(&format_id) {
        tracing::error!("could not submit download form for {format_id}: {err}");
    }

    spawn(async move {
        sleep_ms(DOWNLOADING_RESET_MS).await;

        // A later trigger owns the marker now; leave it alone.
        if downloading_format().as_deref() == Some(format_id.as_str()) {
            downloading_format.set(None);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_link_rejects_empty_input() {
        assert_eq!(validate_link(""), Err("Please enter a YouTube link"));
        assert_eq!(validate_link("   "), Err("Please enter a YouTube link"));
    }

    #[test]
    fn test_validate_link_accepts_nonempty_input() {
        assert!(validate_link("https://www.youtube.com/watch?v=abc").is_ok());
    }

    #[test]
    fn test_embed_url_from_watch_link() {
        assert_eq!(
            embed_preview_url("https://www.youtube.com/watch?v=ABC123"),
            Some("https://www.youtube.com/embed/ABC123".to_string())
        );
    }

    #[test]
    fn test_embed_url_ignores_extra_query_parameters() {
        assert_eq!(
            embed_preview_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s&list=PL1"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url_from_short_link() {
        assert_eq!(
            embed_preview_url("https://youtu.be/dQw4w9WgXcQ"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url_from_shorts_and_embed_paths() {
        assert_eq!(
            embed_preview_url("https://www.youtube.com/shorts/xyz789"),
            Some("https://www.youtube.com/embed/xyz789".to_string())
        );
        assert_eq!(
            embed_preview_url("https://www.youtube.com/embed/xyz789"),
            Some("https://www.youtube.com/embed/xyz789".to_string())
        );
    }

    #[test]
    fn test_embed_url_falls_back_to_bare_v_parameter() {
        assert_eq!(
            embed_preview_url("www.youtube.com/watch?v=abc&feature=share"),
            Some("https://www.youtube.com/embed/abc".to_string())
        );
    }

    #[test]
    fn test_embed_url_missing_video_id() {
        assert_eq!(embed_preview_url("https://example.com/clip/42"), None);
        assert_eq!(embed_preview_url("https://www.youtube.com/watch"), None);
        assert_eq!(embed_preview_url("https://www.youtube.com/watch?v="), None);
        assert_eq!(embed_preview_url("not a link"), None);
    }
}
