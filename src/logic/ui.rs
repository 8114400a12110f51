//! UI timing logic

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Error toasts linger longer so the message can be read
pub const ERROR_TOAST_DURATION_MS: u128 = 4000;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use rackdesk::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast("Rack slot created", 1000));
/// assert!(should_dismiss_toast("Rack slot created", 1500));
/// assert!(!should_dismiss_toast("Error: Failed to fetch users", 2000));
/// ```
pub fn should_dismiss_toast(message: &str, elapsed_ms: u128) -> bool {
    let limit = if is_error_message(message) {
        ERROR_TOAST_DURATION_MS
    } else {
        TOAST_DURATION_MS
    };
    elapsed_ms >= limit
}

pub fn is_error_message(message: &str) -> bool {
    message.starts_with("Error:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toast_dismissed_after_longer_delay() {
        assert!(should_dismiss_toast("Error: boom", 4000));
        assert!(!should_dismiss_toast("Error: boom", 3999));
    }

    #[test]
    fn test_is_error_message() {
        assert!(is_error_message("Error: HTTP 500"));
        assert!(!is_error_message("Saved"));
    }
}
