/// Backend base URL baked into the client bundle at compile time.
///
/// Set `VIDGRAB_BACKEND_API` when building to point the app at a deployed
/// backend; it falls back to a local address when unset.
pub const BACKEND_API: &str = match option_env!("VIDGRAB_BACKEND_API") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Endpoint that lists the available formats for a video link.
pub fn formats_endpoint() -> String {
    format!("{BACKEND_API}/get-formats")
}

/// Endpoint that streams the selected format back as a file download.
pub fn download_endpoint() -> String {
    format!("{BACKEND_API}/download")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_derive_from_backend_base() {
        assert_eq!(formats_endpoint(), format!("{BACKEND_API}/get-formats"));
        assert_eq!(download_endpoint(), format!("{BACKEND_API}/download"));
    }

    #[test]
    fn test_backend_base_has_no_trailing_slash() {
        assert!(!BACKEND_API.ends_with('/'));
    }
}
