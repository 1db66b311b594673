// Functionality shared across platforms

#[cfg(feature = "web")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(feature = "web"))]
pub async fn sleep_ms(ms: u32) {
    futures_timer::Delay::new(std::time::Duration::from_millis(u64::from(ms))).await;
}

// Download submission is a browser navigation, so outside the web platform
// this is a no-op.
#[cfg(not(feature = "web"))]
pub fn submit_download_form(_format_id: &str) -> Result<(), String> {
    Ok(())
}
