//! HTML Views
//!
//! Login and welcome pages, rendered with minijinja. Templates are compiled
//! into the binary; `.html` templates are auto-escaped.

use std::sync::LazyLock;

use minijinja::{Environment, UndefinedBehavior, Value, context};

use crate::domain::value_object::OAuthProvider;
use crate::error::{AuthError, AuthResult};
use crate::presentation::router::{LOGIN_PATH, LOGOUT_PATH};

const APP_TITLE: &str = "Supabase OAuth MVP";
const PROVIDER_NAME: &str = "Supabase";

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("templates/layout.html")),
    ("login.html", include_str!("templates/login.html")),
    ("welcome.html", include_str!("templates/welcome.html")),
];

static ENV: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::error!(template = %name, error = %e, "Failed to compile template");
        }
    }
    env
});

// Our own route constants; the HTML escaper would otherwise turn '/' into "&#x2f;"
fn route(path: &'static str) -> Value {
    Value::from_safe_string(path.to_string())
}

fn render(name: &str, ctx: minijinja::Value) -> AuthResult<String> {
    ENV.get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|e| AuthError::Internal(format!("Failed to render {name}: {e}")))
}

/// Login page with the "Login with <provider>" button
pub fn render_login(provider: OAuthProvider) -> AuthResult<String> {
    render(
        "login.html",
        context! {
            app_title => APP_TITLE,
            provider_name => PROVIDER_NAME,
            oauth_provider_label => provider.label(),
            login_path => route(LOGIN_PATH),
        },
    )
}

/// Welcome page showing the signed-in user's email
pub fn render_welcome(email: &str, provider: OAuthProvider) -> AuthResult<String> {
    render(
        "welcome.html",
        context! {
            app_title => APP_TITLE,
            provider_name => PROVIDER_NAME,
            oauth_provider_label => provider.label(),
            email => email,
            logout_path => route(LOGOUT_PATH),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page() {
        let html = render_login(OAuthProvider::Google).unwrap();
        assert!(html.contains("<title>Login</title>"));
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains("Login with Google"));
        assert!(html.contains("access_token="));
    }

    #[test]
    fn test_welcome_page_shows_email() {
        let html = render_welcome("someone.else+tag@example.com", OAuthProvider::Google).unwrap();
        assert!(html.contains(r#"<span class="email">someone.else+tag@example.com</span>"#));
        assert!(html.contains(r#"href="/logout""#));
    }

    /// Text the browser shows for an escaped HTML fragment
    fn displayed(escaped: &str) -> String {
        escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&#x2f;", "/")
            .replace("&amp;", "&")
    }

    fn email_span(html: &str) -> &str {
        let start = html.find(r#"<span class="email">"#).unwrap() + r#"<span class="email">"#.len();
        let end = start + html[start..].find("</span>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_welcome_page_displays_unusual_addresses_unchanged() {
        for email in [
            "o'brien@example.com",
            "a/b@example.com",
            "x&y@example.com",
            "\"quoted name\"@example.com",
        ] {
            let html = render_welcome(email, OAuthProvider::Google).unwrap();
            assert_eq!(displayed(email_span(&html)), email);
        }
    }

    #[test]
    fn test_welcome_page_escapes_markup() {
        let html = render_welcome("<script>alert(1)</script>@x.io", OAuthProvider::Google).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
