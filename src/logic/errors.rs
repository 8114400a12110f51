use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401
    Forbidden,    // HTTP 403
    NotFound,     // HTTP 404
    ClientError,  // Other HTTP 4xx (validation, conflicts)
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Find the first `reqwest::Error` anywhere in the chain
fn find_reqwest_error(error: &Error) -> Option<&reqwest::Error> {
    error.chain().find_map(|err| err.downcast_ref::<reqwest::Error>())
}

/// HTTP status carried by the error, if the server answered at all
pub fn http_status(error: &Error) -> Option<u16> {
    find_reqwest_error(error)
        .and_then(|e| e.status())
        .map(|status| status.as_u16())
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    if let Some(status) = http_status(error) {
        return match status {
            401 => ErrorType::Unauthorized,
            403 => ErrorType::Forbidden,
            404 => ErrorType::NotFound,
            400..=499 => ErrorType::ClientError,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        };
    }

    if let Some(reqwest_err) = find_reqwest_error(error) {
        if reqwest_err.is_timeout() {
            return ErrorType::Timeout;
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Root-cause message suitable for a toast
pub fn format_error_message(error: &Error) -> String {
    if let Some(reqwest_err) = find_reqwest_error(error) {
        if let Some(status) = reqwest_err.status() {
            return format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
            .trim_end()
            .to_string();
        }
        return reqwest_err.to_string();
    }

    error
        .chain()
        .last()
        .map(|root| root.to_string())
        .unwrap_or_else(|| error.to_string())
}

/// Toast text for a failed operation, e.g. "Error: Failed to fetch users: HTTP 500"
pub fn failure_toast(action: &str, error: &Error) -> String {
    let hint = match classify_error(error) {
        ErrorType::Unauthorized => " (session rejected, sign in again)",
        _ => "",
    };
    format!("Error: {}: {}{}", action, format_error_message(error), hint)
}
