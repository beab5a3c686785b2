//! AI-insight request policy
//!
//! The generative endpoint is flaky enough to deserve a bounded retry loop:
//! two retries with a fixed one-second backoff, and a body check that treats
//! empty or error-marked responses as failures. The actual HTTP call lives
//! in the ui crate; this module owns the decisions.

/// Retry behavior for the insight endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Fixed delay between attempts, in milliseconds
    pub backoff_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 2, backoff_ms: 1_000 }
    }
}

impl RetryPolicy {
    pub fn total_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Whether a failure on `attempt` (0-based) should be retried
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }
}

/// A response body that is blank or carries an explicit error marker is a
/// failure, retried exactly like a transport error.
pub fn is_rejected_body(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.is_empty() || trimmed.to_lowercase().contains("error")
}

/// Prompt sent to the insight endpoint for a progress update
pub fn build_prompt(title: &str, description: &str) -> String {
    format!(
        "The user has completed a learning activity titled \"{}\" with this \
         description: \"{}\". Please provide deeper motivational insights \
         beyond this description.",
        title, description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_makes_three_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.total_attempts(), 3);
        assert_eq!(policy.backoff_ms, 1_000);

        // Simulate an endpoint that always fails: the loop runs exactly
        // three times before giving up.
        let mut attempts = 0;
        loop {
            attempts += 1;
            let failed = true;
            if failed && policy.should_retry(attempts - 1) {
                continue;
            }
            break;
        }
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_rejected_bodies() {
        assert!(is_rejected_body(""));
        assert!(is_rejected_body("   \n  "));
        assert!(is_rejected_body("Error fetching insight."));
        assert!(is_rejected_body("internal ERROR occurred"));
        assert!(!is_rejected_body("Great progress on borrow checking!"));
    }

    #[test]
    fn test_prompt_includes_title_and_description() {
        let prompt = build_prompt("Rust ownership", "worked through chapter 4");
        assert!(prompt.contains("\"Rust ownership\""));
        assert!(prompt.contains("\"worked through chapter 4\""));
    }
}
