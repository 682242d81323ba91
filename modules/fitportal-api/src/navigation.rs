//! One-shot navigation for redirect views.
//!
//! A [`RedirectView`] schedules a single navigation when it is activated. The
//! navigation runs as a spawned task after activation returns; deactivating
//! (or dropping) the view before the task runs cancels it.

use std::sync::Arc;

use axum::response::{IntoResponse, Redirect, Response};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Landing page of the admin area.
pub const ADMIN_HOME: &str = "/admin";

/// How a navigation affects history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Replace the current entry, so going back skips the page that navigated.
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: String,
    pub mode: HistoryMode,
}

impl IntoResponse for Navigation {
    fn into_response(self) -> Response {
        match self.mode {
            // 303 leaves only the target in the browser history.
            HistoryMode::Replace => Redirect::to(&self.target).into_response(),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, navigation: Navigation);
}

/// Forwards navigations to whoever holds the receiving end.
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Navigation>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Navigation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, navigation: Navigation) {
        if let Err(e) = self.tx.send(navigation) {
            debug!(to = %e.0.target, "Navigation dropped, receiver gone");
        }
    }
}

/// A route whose only effect is to navigate elsewhere.
pub struct RedirectView {
    target: &'static str,
    task: Option<JoinHandle<()>>,
}

impl RedirectView {
    pub fn new(target: &'static str) -> Self {
        Self { target, task: None }
    }

    /// Schedule the navigation. Calling this again while active is a no-op,
    /// so re-rendering never navigates twice.
    pub fn activate(&mut self, navigator: Arc<dyn Navigator>) {
        if self.task.is_some() {
            return;
        }
        let navigation = Navigation {
            target: self.target.to_string(),
            mode: HistoryMode::Replace,
        };
        self.task = Some(tokio::spawn(async move {
            debug!(to = %navigation.target, "Redirecting");
            navigator.navigate(navigation);
        }));
    }

    /// Cancel the navigation if it has not fired yet.
    pub fn deactivate(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for a scheduled navigation to finish or be cancelled.
    pub async fn settled(&mut self) {
        if let Some(task) = self.task.as_mut() {
            if !task.is_finished() {
                let _ = task.await;
            }
        }
    }
}

impl Drop for RedirectView {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use axum::http::{header, StatusCode};

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: Mutex<Vec<Navigation>>,
    }

    impl RecordingNavigator {
        fn calls(&self) -> Vec<Navigation> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, navigation: Navigation) {
            self.calls.lock().unwrap().push(navigation);
        }
    }

    #[tokio::test]
    async fn activation_navigates_once_with_replace() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut view = RedirectView::new(ADMIN_HOME);

        view.activate(navigator.clone());
        view.settled().await;

        assert_eq!(
            navigator.calls(),
            vec![Navigation {
                target: "/admin".to_string(),
                mode: HistoryMode::Replace,
            }]
        );
    }

    #[tokio::test]
    async fn repeated_activation_does_not_navigate_again() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut view = RedirectView::new(ADMIN_HOME);

        view.activate(navigator.clone());
        view.activate(navigator.clone());
        view.settled().await;
        view.activate(navigator.clone());
        view.settled().await;

        assert_eq!(navigator.calls().len(), 1);
    }

    #[tokio::test]
    async fn navigation_does_not_run_during_activation() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut view = RedirectView::new(ADMIN_HOME);

        view.activate(navigator.clone());
        assert!(navigator.calls().is_empty());

        view.settled().await;
        assert_eq!(navigator.calls().len(), 1);
    }

    #[tokio::test]
    async fn deactivating_before_firing_cancels() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut view = RedirectView::new(ADMIN_HOME);

        view.activate(navigator.clone());
        view.deactivate();
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }

        assert!(navigator.calls().is_empty());
    }

    #[tokio::test]
    async fn dropping_before_firing_cancels() {
        let navigator = Arc::new(RecordingNavigator::default());
        {
            let mut view = RedirectView::new(ADMIN_HOME);
            view.activate(navigator.clone());
        }
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }

        assert!(navigator.calls().is_empty());
    }

    #[tokio::test]
    async fn reactivation_after_deactivation_fires_again() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut view = RedirectView::new(ADMIN_HOME);

        view.activate(navigator.clone());
        view.settled().await;
        view.deactivate();
        view.activate(navigator.clone());
        view.settled().await;

        assert_eq!(navigator.calls().len(), 2);
    }

    #[tokio::test]
    async fn channel_navigator_delivers_to_receiver() {
        let (navigator, mut rx) = ChannelNavigator::new();
        let mut view = RedirectView::new(ADMIN_HOME);

        view.activate(Arc::new(navigator));

        let navigation = rx.recv().await.unwrap();
        assert_eq!(navigation.target, "/admin");
        assert_eq!(navigation.mode, HistoryMode::Replace);
        assert!(rx.recv().await.is_none(), "only one navigation expected");
    }

    #[test]
    fn replace_becomes_see_other() {
        let response = Navigation {
            target: "/admin".to_string(),
            mode: HistoryMode::Replace,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/admin");
    }

}
