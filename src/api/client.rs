use crate::api::error::ApiError;
use crate::api::types::VideoFormat;

/// Ask the backend which formats are available for a video link.
///
/// Issues a single `POST {backend}/get-formats` with a JSON body and decodes
/// the response into the ordered format list.
#[cfg(feature = "web")]
pub async fn fetch_formats(link: &str) -> Result<Vec<VideoFormat>, ApiError> {
    use gloo_utils::format::JsValueSerdeExt;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    use crate::api::types::FormatsRequest;
    use crate::config;

    let body = serde_json::to_string(&FormatsRequest {
        link: link.to_string(),
    })
    .map_err(|err| ApiError::Transport(format!("failed to encode request: {err}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&config::formats_endpoint(), &opts)
        .map_err(|err| ApiError::Transport(format!("failed to create request: {err:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| ApiError::Transport(format!("failed to set headers: {err:?}")))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| ApiError::Transport(format!("failed to fetch: {err:?}")))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("response is not a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let json = JsFuture::from(
        response
            .json()
            .map_err(|err| ApiError::Decode(format!("{err:?}")))?,
    )
    .await
    .map_err(|err| ApiError::Decode(format!("{err:?}")))?;

    json.into_serde()
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(not(feature = "web"))]
pub async fn fetch_formats(_link: &str) -> Result<Vec<VideoFormat>, ApiError> {
    Err(ApiError::Unsupported)
}
