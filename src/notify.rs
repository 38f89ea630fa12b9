//! Blocking user notifications

/// Show a blocking alert. Failing to show it is only logged.
pub fn alert(message: &str) {
    let shown = web_sys::window()
        .ok_or_else(|| "no window".to_string())
        .and_then(|w| w.alert_with_message(message).map_err(|e| format!("{:?}", e)));
    if let Err(e) = shown {
        log::error!("[UI] Could not show alert '{}': {}", message, e);
    }
}
