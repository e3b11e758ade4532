//! Per-route view payloads.
//!
//! One struct per rendered page, with required vs. optional fields explicit:
//! `next_page` is present-or-null in the rendered context, never absent.

use serde::Serialize;

use socktalk_core::domain::Post;

/// Shared `<head>`-level locals: page title and meta description.
#[derive(Debug, Clone, Serialize)]
pub struct PageLocals {
    pub title: String,
    pub description: String,
}

impl PageLocals {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A post as the templates consume it: identifier and timestamp pre-rendered
/// to strings so the view layer does no formatting of its own.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            body: post.body,
            created_at: post.created_at.format("%B %e, %Y").to_string(),
        }
    }
}

/// Payload for the paginated home listing.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub locals: PageLocals,
    pub data: Vec<PostView>,
    pub current_page: i64,
    pub next_page: Option<i64>,
    pub current_route: String,
}

/// Payload for a single post page.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailView {
    pub locals: PageLocals,
    pub data: PostView,
    pub current_route: String,
}

/// Payload for the search results page.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    pub locals: PageLocals,
    pub data: Vec<PostView>,
    pub current_route: String,
}

/// Payload for the static informational pages.
#[derive(Debug, Clone, Serialize)]
pub struct InfoView {
    pub locals: PageLocals,
    pub current_route: String,
}

/// Payload for the rendered error page. `current_route` is always `/error`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub message: String,
    pub current_route: String,
}

impl ErrorView {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            current_route: "/error".to_string(),
        }
    }
}
