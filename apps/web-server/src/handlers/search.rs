//! Search handler.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use socktalk_core::search::sanitize_term;
use socktalk_shared::{PageLocals, PostView, SearchView};

use crate::handlers::{error, render_view};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// POST /search - free-text search over post titles and bodies.
///
/// The term is sanitized before it reaches the store's pattern matching;
/// the page description echoes the term as the user typed it.
pub async fn search(state: web::Data<AppState>, form: web::Form<SearchForm>) -> HttpResponse {
    let term = form.into_inner().search_term;
    let sanitized = sanitize_term(&term);

    match state.posts.search(&sanitized).await {
        Ok(posts) => {
            let view = SearchView {
                locals: PageLocals::new("Search Results", format!("Search results for: {term}")),
                data: posts.into_iter().map(PostView::from).collect(),
                current_route: "/search".to_string(),
            };
            render_view(&state, "search.html", &view)
        }
        Err(err) => {
            tracing::error!(error = %err, "Error in search route");
            error::internal_error(state.templates.as_ref(), "Search failed")
        }
    }
}
