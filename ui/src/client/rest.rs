//! REST client for the LearnLoop backend
//!
//! One thin method per endpoint. Every method builds a request, attaches
//! the bearer token when a session exists, and maps failures onto
//! [`ApiError`]; 401/403 become `Unauthorized` so call sites can route to
//! the error page.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use learnloop_shared::{
    AuthResponse, CommentRequest, InsightEmailRequest, InsightPromptRequest, InsightSaveRequest,
    LikeRequest, LoginRequest, MarkReadRequest, Notification, PlanSharingEntry, PlanSharingRequest,
    Post, Profile, ProfileUpdateRequest, ProgressUpdate, ProgressUpdateRequest, RegisterRequest,
    UserSummary,
};

use super::ApiError;

/// Client for the LearnLoop REST API
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            response.status_text()
        } else {
            body
        };
        if learnloop_shared::http::is_auth_status(status) {
            Err(ApiError::Unauthorized { status, message })
        } else {
            Err(ApiError::RequestFailed { status, message })
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;
        Self::ensure_ok(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::send(self.authorize(Request::get(&self.url(path)))).await?;
        Self::parse(response).await
    }

    async fn send_body<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::RequestFailed {
                status: 0,
                message: e.to_string(),
            })?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;
        Self::ensure_ok(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send_body(Request::post(&self.url(path)), body).await?;
        Self::parse(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send_body(Request::put(&self.url(path)), body).await?;
        Self::parse(response).await
    }

    /// Multipart POST (media uploads)
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::RequestFailed {
                status: 0,
                message: e.to_string(),
            })?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(e.to_string()))?;
        let response = Self::ensure_ok(response).await?;
        Self::parse(response).await
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/api/auth/register", request).await
    }

    /// Entry point of the Google OAuth flow; the backend redirects back to
    /// `/oauth/success?token=...&userId=...`
    pub fn google_oauth_url(&self) -> String {
        self.url("/oauth2/authorization/google")
    }

    // -----------------------------------------------------------------------
    // Posts
    // -----------------------------------------------------------------------

    pub async fn feed(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        self.get_json(&format!("/api/posts/feed?userId={}", user_id))
            .await
    }

    pub async fn user_posts(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        self.get_json(&format!("/api/posts/user/{}", user_id)).await
    }

    /// Multipart: description, userId, media[], and optional
    /// trimStart/trimEnd seconds applied server-side
    pub async fn create_post(&self, form: FormData) -> Result<Post, ApiError> {
        self.post_form("/api/posts", form).await
    }

    pub async fn update_post(
        &self,
        post_id: &str,
        user_id: &str,
        description: &str,
    ) -> Result<Post, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            user_id: &'a str,
            description: &'a str,
        }
        self.put_json(
            &format!("/api/posts/{}", post_id),
            &Body { user_id, description },
        )
        .await
    }

    pub async fn delete_post(&self, post_id: &str, user_id: &str) -> Result<(), ApiError> {
        Self::send(self.authorize(Request::delete(&self.url(&format!(
            "/api/posts/{}?userId={}",
            post_id, user_id
        )))))
        .await?;
        Ok(())
    }

    /// Toggles the caller's like; returns the updated post
    pub async fn toggle_like(&self, post_id: &str, user_id: &str) -> Result<Post, ApiError> {
        self.post_json(
            &format!("/api/posts/{}/like", post_id),
            &LikeRequest {
                user_id: user_id.to_string(),
            },
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Comments
    // -----------------------------------------------------------------------

    pub async fn add_comment(
        &self,
        post_id: &str,
        request: &CommentRequest,
    ) -> Result<Post, ApiError> {
        self.post_json(&format!("/api/posts/{}/comment", post_id), request)
            .await
    }

    pub async fn update_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        request: &CommentRequest,
    ) -> Result<Post, ApiError> {
        self.put_json(
            &format!("/api/posts/{}/comment/{}", post_id, comment_id),
            request,
        )
        .await
    }

    pub async fn delete_comment(
        &self,
        post_id: &str,
        comment_id: &str,
        user_id: &str,
    ) -> Result<Post, ApiError> {
        let response = Self::send(self.authorize(Request::delete(&self.url(&format!(
            "/api/posts/{}/comment/{}?userId={}",
            post_id, comment_id, user_id
        )))))
        .await?;
        Self::parse(response).await
    }

    // -----------------------------------------------------------------------
    // Profiles and the follow graph
    // -----------------------------------------------------------------------

    pub async fn public_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        self.get_json(&format!("/api/profile/public/{}", user_id))
            .await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        request: &ProfileUpdateRequest,
    ) -> Result<Profile, ApiError> {
        self.put_json(&format!("/api/profile/{}/update", user_id), request)
            .await
    }

    pub async fn upload_profile_picture(
        &self,
        user_id: &str,
        form: FormData,
    ) -> Result<Profile, ApiError> {
        self.post_form(
            &format!("/api/profile/{}/upload-profile-picture", user_id),
            form,
        )
        .await
    }

    pub async fn follow(&self, target_user_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.send_body(
            Request::post(&self.url(&format!("/api/profile/{}/follow", target_user_id))),
            &LikeRequest {
                user_id: user_id.to_string(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn unfollow(&self, target_user_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.send_body(
            Request::post(&self.url(&format!("/api/profile/{}/unfollow", target_user_id))),
            &LikeRequest {
                user_id: user_id.to_string(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn followers(&self, user_id: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json(&format!("/api/profile/followers?userId={}", user_id))
            .await
    }

    pub async fn following(&self, user_id: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json(&format!("/api/profile/following?userId={}", user_id))
            .await
    }

    pub async fn suggestions(&self, user_id: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json(&format!("/api/profile/suggestions?userId={}", user_id))
            .await
    }

    // -----------------------------------------------------------------------
    // Progress updates and insights
    // -----------------------------------------------------------------------

    pub async fn progress_updates(&self, user_id: &str) -> Result<Vec<ProgressUpdate>, ApiError> {
        self.get_json(&format!("/api/progress-updates/user/{}", user_id))
            .await
    }

    pub async fn create_progress_update(
        &self,
        request: &ProgressUpdateRequest,
    ) -> Result<ProgressUpdate, ApiError> {
        self.post_json("/api/progress-updates", request).await
    }

    pub async fn update_progress_update(
        &self,
        id: &str,
        request: &ProgressUpdateRequest,
    ) -> Result<ProgressUpdate, ApiError> {
        self.put_json(&format!("/api/progress-updates/{}", id), request)
            .await
    }

    pub async fn delete_progress_update(&self, id: &str) -> Result<(), ApiError> {
        Self::send(self.authorize(Request::delete(
            &self.url(&format!("/api/progress-updates/{}", id)),
        )))
        .await?;
        Ok(())
    }

    pub async fn save_insight(
        &self,
        update_id: &str,
        request: &InsightSaveRequest,
    ) -> Result<(), ApiError> {
        self.send_body(
            Request::put(&self.url(&format!("/api/progress-updates/{}/insight", update_id))),
            request,
        )
        .await?;
        Ok(())
    }

    pub async fn email_insight(
        &self,
        update_id: &str,
        request: &InsightEmailRequest,
    ) -> Result<(), ApiError> {
        self.send_body(
            Request::post(&self.url(&format!("/api/progress-updates/{}/email", update_id))),
            request,
        )
        .await?;
        Ok(())
    }

    /// One attempt against the backend's generative-text proxy. The response
    /// body is plain text. Retrying lives in [`super::fetch_insight`].
    pub async fn generate_insight(&self, prompt: &str) -> Result<String, ApiError> {
        let response = self
            .send_body(
                Request::post(&self.url("/api/gemini/insight")),
                &InsightPromptRequest {
                    prompt: prompt.to_string(),
                },
            )
            .await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    // -----------------------------------------------------------------------
    // Plan sharing
    // -----------------------------------------------------------------------

    pub async fn plans(&self, user_id: &str) -> Result<Vec<PlanSharingEntry>, ApiError> {
        self.get_json(&format!("/api/plan-sharing/user/{}", user_id))
            .await
    }

    pub async fn create_plan(
        &self,
        request: &PlanSharingRequest,
    ) -> Result<PlanSharingEntry, ApiError> {
        self.post_json("/api/plan-sharing", request).await
    }

    pub async fn update_plan(
        &self,
        id: &str,
        request: &PlanSharingRequest,
    ) -> Result<PlanSharingEntry, ApiError> {
        self.put_json(&format!("/api/plan-sharing/{}", id), request)
            .await
    }

    pub async fn delete_plan(&self, id: &str) -> Result<(), ApiError> {
        Self::send(self.authorize(Request::delete(
            &self.url(&format!("/api/plan-sharing/{}", id)),
        )))
        .await?;
        Ok(())
    }

    pub async fn set_favorite(
        &self,
        id: &str,
        is_favorite: bool,
    ) -> Result<PlanSharingEntry, ApiError> {
        let response = Self::send(self.authorize(Request::patch(&self.url(&format!(
            "/api/plan-sharing/{}/favorite?isFavorite={}",
            id,
            if is_favorite { 1 } else { 0 }
        )))))
        .await?;
        Self::parse(response).await
    }

    // -----------------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------------

    pub async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>, ApiError> {
        self.get_json(&format!("/api/user-notifications/{}", user_id))
            .await
    }

    pub async fn mark_read(&self, request: &MarkReadRequest) -> Result<(), ApiError> {
        self.send_body(
            Request::post(&self.url("/api/user-notifications/mark-read")),
            request,
        )
        .await?;
        Ok(())
    }

    pub async fn clear_notifications(&self, user_id: &str) -> Result<(), ApiError> {
        Self::send(self.authorize(Request::delete(&self.url(&format!(
            "/api/user-notifications/clear-all?userId={}",
            user_id
        )))))
        .await?;
        Ok(())
    }
}
