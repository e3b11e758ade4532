use minijinja::{Environment, Value, default_auto_escape_callback};

/// Rendering seam between handlers and the template machinery.
pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        env.add_function("is_active_route", is_active_route);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}

/// Navigation highlighting: the class for a nav link is `active` exactly when
/// its route is the route being rendered.
fn is_active_route(route: String, current_route: String) -> String {
    if route == current_route {
        "active".to_string()
    } else {
        String::new()
    }
}

/// Template loader for minijinja that loads from embedded sources
fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template_content = match name {
        // Shared layout
        "layout.html" => Some(include_str!("html/layout.html")),

        // Public pages
        "index.html" => Some(include_str!("html/index.html")),
        "post.html" => Some(include_str!("html/post.html")),
        "search.html" => Some(include_str!("html/search.html")),
        "about.html" => Some(include_str!("html/about.html")),
        "contact.html" => Some(include_str!("html/contact.html")),

        // Error page
        "error.html" => Some(include_str!("html/error.html")),

        _ => None,
    };

    Ok(template_content.map(|s| s.to_string()))
}
