use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::components::{
    render_loading, render_news_list, render_placeholder, SETTINGS_PAGE, USERS_PAGE,
};
use crate::navigation::{ChannelNavigator, RedirectView, ADMIN_HOME};
use crate::AppState;

// --- Admin placeholders ---

pub async fn settings_page() -> impl IntoResponse {
    Html(render_placeholder(SETTINGS_PAGE))
}

pub async fn users_page() -> impl IntoResponse {
    Html(render_placeholder(USERS_PAGE))
}

// --- Redirects ---

/// Entry point into the admin area. Renders nothing; the redirect view's
/// navigation becomes the response.
pub async fn admin_entry_page() -> Response {
    let (navigator, mut navigations) = ChannelNavigator::new();
    let mut view = RedirectView::new(ADMIN_HOME);
    view.activate(Arc::new(navigator));

    let navigation = navigations.recv().await;
    view.settled().await;

    match navigation {
        Some(navigation) => navigation.into_response(),
        None => {
            warn!("Redirect view finished without navigating");
            Html(String::new()).into_response()
        }
    }
}

// --- App area ---

pub async fn app_root_page() -> impl IntoResponse {
    Html(render_loading())
}

/// News list. Falls back to the loading view when the news source is slower
/// than the configured timeout.
pub async fn news_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match tokio::time::timeout(state.news_timeout, state.news.list_news()).await {
        Ok(Ok(items)) => Html(render_news_list(items)),
        Ok(Err(e)) => {
            warn!(error = %e, "Failed to load news");
            Html(render_news_list(Vec::new()))
        }
        Err(_) => {
            warn!(timeout = ?state.news_timeout, "News source timed out");
            Html(render_loading())
        }
    }
}
