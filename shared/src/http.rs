//! HTTP status classification
//!
//! A 401 or 403 from the backend means the bearer token was rejected, and
//! the app routes to the error page instead of surfacing the raw failure.
//! The stored session is still only cleared by an explicit Log Out.

/// Whether `status` is an authentication or authorization failure
pub fn is_auth_status(status: u16) -> bool {
    status == 401 || status == 403
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        assert!(is_auth_status(401));
        assert!(is_auth_status(403));
    }

    #[test]
    fn test_other_failures_are_not_auth() {
        assert!(!is_auth_status(400));
        assert!(!is_auth_status(404));
        assert!(!is_auth_status(500));
        assert!(!is_auth_status(200));
    }
}
