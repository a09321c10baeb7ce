//! Page Route
//!
//! - GET / - Dashboard shell. The page fetches `/api/v1/dashboard` and hands
//!   the chart documents to Vega-Embed and Plotly.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(INDEX_HTML.replace("{{title}}", &html_escape(&state.settings.title)))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_has_title_slot() {
        assert!(INDEX_HTML.contains("{{title}}"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
