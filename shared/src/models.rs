//! Backend JSON shapes
//!
//! All domain entities are owned by the backend; the client treats them as
//! opaque JSON and enforces no invariants beyond required-field validation.
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post in the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,

    /// Author user id
    pub user_id: String,

    /// Author display name
    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub description: String,

    /// Ordered media attachments (image/video URLs)
    #[serde(default)]
    pub media_urls: Vec<String>,

    /// User ids that liked this post
    #[serde(default)]
    pub likes: Vec<String>,

    #[serde(default)]
    pub comments: Vec<Comment>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Author's current profile picture, pushed over the WebSocket topic
    #[serde(default)]
    pub profile_picture_path: Option<String>,
}

/// A comment on a post, with optional single-level reply threading
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,

    #[serde(default)]
    pub user_name: String,

    pub content: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Present on replies; replies never nest further
    #[serde(default)]
    pub parent_id: Option<String>,

    #[serde(default)]
    pub user_profile_picture: Option<String>,
}

/// Public profile of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub profile_picture_path: Option<String>,

    /// Post ids authored by this user
    #[serde(default)]
    pub posts: Vec<String>,

    /// Follower user ids
    #[serde(default)]
    pub followers: Vec<String>,

    /// Followed user ids
    #[serde(default)]
    pub following: Vec<String>,
}

/// Lightweight user reference used in follower lists and suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub profile_picture_path: Option<String>,
}

/// Kind of a learning-progress update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressType {
    #[serde(rename = "Completed Tutorial")]
    CompletedTutorial,
    #[serde(rename = "New Skill Learned")]
    NewSkillLearned,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl ProgressType {
    pub const ALL: [ProgressType; 3] = [
        ProgressType::CompletedTutorial,
        ProgressType::NewSkillLearned,
        ProgressType::InProgress,
    ];

    /// Wire/display label
    pub fn label(self) -> &'static str {
        match self {
            ProgressType::CompletedTutorial => "Completed Tutorial",
            ProgressType::NewSkillLearned => "New Skill Learned",
            ProgressType::InProgress => "In Progress",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Only completed activities get AI insights
    pub fn is_completed(self) -> bool {
        !matches!(self, ProgressType::InProgress)
    }
}

/// A user-authored learning milestone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub id: String,
    pub user_id: String,

    #[serde(rename = "type")]
    pub kind: ProgressType,

    /// Free-form sub-category for In Progress entries
    #[serde(default)]
    pub in_progress_type: Option<String>,

    pub title: String,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub description: String,

    /// AI-generated HTML, lazily populated
    #[serde(default)]
    pub ai_insight: Option<String>,

    /// User's own notes, HTML from the rich-text editor
    #[serde(default)]
    pub user_reflection: Option<String>,
}

/// A shared learning plan, independent of progress updates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSharingEntry {
    pub id: String,
    pub user_id: String,
    pub title: String,

    #[serde(default)]
    pub topics: String,

    #[serde(default)]
    pub description: String,

    /// Resource URLs
    #[serde(default)]
    pub resources: Vec<String>,

    #[serde(default)]
    pub timeline_start: Option<DateTime<Utc>>,

    #[serde(default)]
    pub timeline_end: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_favorite: bool,
}

/// Kind of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Mention,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,

    #[serde(rename = "type")]
    pub kind: NotificationKind,

    pub message: String,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub read: bool,
}

// ---------------------------------------------------------------------------
// Request/response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Session issued by `POST /api/auth/login` (and the OAuth redirect)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,

    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub user_id: String,
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSaveRequest {
    pub ai_insight: String,
    pub user_reflection: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightEmailRequest {
    pub to: String,
    pub subject: String,
    /// HTML body
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPromptRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub user_id: String,
    pub notification_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSharingRequest {
    pub user_id: String,
    pub title: String,
    pub topics: String,
    pub description: String,
    pub resources: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdateRequest {
    pub user_id: String,

    #[serde(rename = "type")]
    pub kind: ProgressType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress_type: Option<String>,

    pub title: String,
    pub date: DateTime<Utc>,
    pub description: String,
}

/// Body pushed on `/topic/profile-update/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateMessage {
    pub user_id: String,
    pub profile_picture_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_wire_shape() {
        let json = r#"{
            "id": "p1",
            "userId": "u1",
            "userName": "ada",
            "description": "hello",
            "mediaUrls": ["a.png"],
            "likes": ["u2"],
            "comments": [],
            "profilePicturePath": "pic.png"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, "u1");
        assert_eq!(post.media_urls, vec!["a.png"]);
        assert_eq!(post.likes.len(), 1);
        assert!(post.created_at.is_none());

        let out = serde_json::to_string(&post).unwrap();
        assert!(out.contains("\"userId\":\"u1\""));
    }

    #[test]
    fn test_progress_type_labels() {
        let json = r#"{"id":"1","userId":"u1","type":"New Skill Learned","title":"Rust"}"#;
        let update: ProgressUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.kind, ProgressType::NewSkillLearned);
        assert!(update.kind.is_completed());
        assert!(!ProgressType::InProgress.is_completed());
        assert_eq!(ProgressType::from_label("Completed Tutorial"), Some(ProgressType::CompletedTutorial));
        assert_eq!(ProgressType::from_label("nope"), None);
    }

    #[test]
    fn test_notification_kind_lowercase() {
        let json = r#"{"id":"n1","userId":"u1","type":"follow","message":"x","read":false}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::Follow);
        assert!(!n.read);
    }

    #[test]
    fn test_profile_update_message_roundtrip() {
        let msg = ProfileUpdateMessage {
            user_id: "u1".to_string(),
            profile_picture_path: "/media/u1.png".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"profilePicturePath\""));
        let parsed: ProfileUpdateMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.user_id, "u1");
    }

    #[test]
    fn test_comment_request_skips_absent_parent() {
        let req = CommentRequest {
            user_id: "u1".to_string(),
            content: "nice".to_string(),
            parent_id: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("parentId"));
    }
}
