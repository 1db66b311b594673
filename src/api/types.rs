use serde::{Deserialize, Serialize};

/// One selectable download option returned by the backend for a video link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFormat {
    pub format_id: String,
    pub resolution: String,
    pub extension: String,
}

impl VideoFormat {
    pub fn label(&self) -> String {
        format!("{} ({})", self.resolution, self.extension)
    }
}

/// Request body for the format discovery endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct FormatsRequest {
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_format_deserializes_from_backend_payload() {
        let payload = r#"[
            {"formatId":"18","resolution":"360p","extension":"mp4"},
            {"formatId":"22","resolution":"720p","extension":"mp4"},
            {"formatId":"140","resolution":"audio only","extension":"m4a"}
        ]"#;

        let formats: Vec<VideoFormat> = serde_json::from_str(payload).unwrap();

        assert_eq!(formats.len(), 3);
        assert_eq!(formats[0].format_id, "18");
        assert_eq!(formats[1].resolution, "720p");
        assert_eq!(formats[2].extension, "m4a");
    }

    #[test]
    fn test_video_format_order_matches_response_order() {
        let payload = r#"[
            {"formatId":"b","resolution":"1080p","extension":"webm"},
            {"formatId":"a","resolution":"144p","extension":"3gp"}
        ]"#;

        let formats: Vec<VideoFormat> = serde_json::from_str(payload).unwrap();
        let ids: Vec<&str> = formats.iter().map(|f| f.format_id.as_str()).collect();

        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_formats_request_serializes_link_field() {
        let request = FormatsRequest {
            link: "https://www.youtube.com/watch?v=abc".to_string(),
        };

        let body = serde_json::to_string(&request).unwrap();

        assert_eq!(body, r#"{"link":"https://www.youtube.com/watch?v=abc"}"#);
    }

    #[test]
    fn test_format_label_combines_resolution_and_extension() {
        let format = VideoFormat {
            format_id: "22".to_string(),
            resolution: "720p".to_string(),
            extension: "mp4".to_string(),
        };

        assert_eq!(format.label(), "720p (mp4)");
    }
}
