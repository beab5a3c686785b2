//! Retrying AI-insight fetch
//!
//! The browser never talks to the generative-text provider directly; it
//! calls the backend proxy so no API key ships in the bundle. A body that
//! is empty or error-marked counts as a failure and is retried like a
//! transport error, per [`RetryPolicy`]. Nothing is cached negatively, so
//! the user can retry manually right after a terminal failure.

use gloo_timers::future::TimeoutFuture;

use learnloop_shared::insight::{build_prompt, is_rejected_body, RetryPolicy};
use learnloop_shared::InsightSaveRequest;

use super::{ApiError, RestClient};

/// Fetch an insight for `prompt`, retrying per the default policy
pub async fn fetch_insight(client: &RestClient, prompt: &str) -> Result<String, ApiError> {
    let policy = RetryPolicy::default();
    let mut attempt = 0u32;

    loop {
        let failure = match client.generate_insight(prompt).await {
            Ok(body) if !is_rejected_body(&body) => return Ok(body.trim().to_string()),
            Ok(_) => ApiError::InsightFailed("empty or invalid response".to_string()),
            Err(e) => e,
        };

        if !policy.should_retry(attempt) {
            tracing::error!("insight request failed after {} attempts", attempt + 1);
            return Err(ApiError::InsightFailed(failure.to_string()));
        }

        attempt += 1;
        tracing::warn!(attempt, "insight attempt failed, retrying: {}", failure);
        TimeoutFuture::new(policy.backoff_ms).await;
    }
}

/// Generate an insight for a progress update and persist it back to the
/// backend together with the user's current reflection editor content.
/// Persistence is a side effect of generation, not a separate save step.
pub async fn generate_and_save(
    client: &RestClient,
    update_id: &str,
    title: &str,
    description: &str,
    reflection_html: &str,
) -> Result<String, ApiError> {
    let prompt = build_prompt(title, description);
    let insight = fetch_insight(client, &prompt).await?;

    client
        .save_insight(
            update_id,
            &InsightSaveRequest {
                ai_insight: insight.clone(),
                user_reflection: reflection_html.to_string(),
            },
        )
        .await?;

    Ok(insight)
}
