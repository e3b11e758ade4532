//! Post listing and detail handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use socktalk_core::error::StoreError;
use socktalk_core::pagination::{self, DEFAULT_PAGE_SIZE};
use socktalk_shared::{HomeView, PageLocals, PostDetailView, PostView};

use crate::handlers::{BASE_DESCRIPTION, SITE_NAME, error, render_view};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    page: Option<String>,
}

impl ListingQuery {
    /// Missing or non-numeric `page` defaults to 1. Zero and negative values
    /// pass through unmodified; there is no lower-bound validation.
    fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }
}

/// GET / - home page with paginated posts.
pub async fn index(state: web::Data<AppState>, query: web::Query<ListingQuery>) -> HttpResponse {
    let page = query.page();

    match load_home(&state, page).await {
        Ok(view) => render_view(&state, "index.html", &view),
        Err(err) => {
            tracing::error!(error = %err, page, "Error in home route");
            error::internal_error(state.templates.as_ref(), "Failed to load blog posts")
        }
    }
}

async fn load_home(state: &AppState, page: i64) -> Result<HomeView, StoreError> {
    let per_page = DEFAULT_PAGE_SIZE;
    let skip = (per_page as i64).saturating_mul(page.saturating_sub(1));

    // The page slice and the total count have no ordering dependency;
    // issue both reads concurrently and wait for the pair.
    let (posts, total_count) =
        tokio::try_join!(state.posts.find_page(skip, per_page), state.posts.count())?;

    let page_info = pagination::paginate(page, total_count, per_page);

    Ok(HomeView {
        locals: PageLocals::new(SITE_NAME, BASE_DESCRIPTION),
        data: posts.into_iter().map(PostView::from).collect(),
        current_page: page_info.current_page,
        next_page: page_info.next_page,
        current_route: "/".to_string(),
    })
}

/// GET /post/{id} - single post page.
pub async fn show(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let id = id.into_inner();

    match state.posts.find_by_id(&id).await {
        Ok(Some(post)) => {
            let view = PostDetailView {
                locals: PageLocals::new(post.title.clone(), BASE_DESCRIPTION),
                data: PostView::from(post),
                current_route: format!("/post/{id}"),
            };
            render_view(&state, "post.html", &view)
        }
        Ok(None) => error::not_found(state.templates.as_ref(), "Post not found"),
        // Malformed identifiers deliberately share the generic failure path.
        Err(err) => {
            tracing::error!(error = %err, post_id = %id, "Error in post route");
            error::internal_error(state.templates.as_ref(), "Failed to load post")
        }
    }
}
