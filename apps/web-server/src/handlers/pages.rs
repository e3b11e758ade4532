//! Static informational pages.

use actix_web::{HttpResponse, web};

use socktalk_shared::{InfoView, PageLocals};

use crate::handlers::render_view;
use crate::state::AppState;

/// GET /about
pub async fn about(state: web::Data<AppState>) -> HttpResponse {
    let view = InfoView {
        locals: PageLocals::new("About SockTalk", "Learn about our community and mission"),
        current_route: "/about".to_string(),
    };
    render_view(&state, "about.html", &view)
}

/// GET /contact
pub async fn contact(state: web::Data<AppState>) -> HttpResponse {
    let view = InfoView {
        locals: PageLocals::new("Contact Us", "Get in touch with the SockTalk team"),
        current_route: "/contact".to_string(),
    };
    render_view(&state, "contact.html", &view)
}
