use dioxus::prelude::*;

use fitportal_common::NewsItem;

pub mod layout;
pub mod loading;
pub mod news_card;
pub mod news_list;
pub mod placeholder;

pub use layout::{Area, Document, DocumentProps};
use loading::LoadingIndicator;
use news_list::NewsList;
use placeholder::Placeholder;
pub use placeholder::{PlaceholderPage, SETTINGS_PAGE, USERS_PAGE};

/// Document language; all page copy is Japanese.
const HTML_LANG: &str = "ja";

// --- Views ---

/// Content of a route, before framing and chrome.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Placeholder(PlaceholderPage),
    Loading,
    NewsList(Vec<NewsItem>),
}

pub(crate) fn render_view(view: &View) -> Element {
    match view {
        View::Placeholder(page) => rsx! {
            Placeholder {
                heading: page.heading.to_string(),
                description: page.description.to_string(),
                back_href: page.back_href.to_string(),
            }
        },
        View::Loading => rsx! { LoadingIndicator {} },
        View::NewsList(items) => rsx! { NewsList { items: items.clone() } },
    }
}

/// Render a complete page. This is the only place chrome is applied.
pub fn render_page(title: &str, active_page: &str, area: Area, view: View) -> String {
    let mut dom = VirtualDom::new_with_props(
        Document,
        DocumentProps {
            title: title.to_string(),
            active_page: active_page.to_string(),
            area,
            view,
        },
    );
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"{HTML_LANG}\">{}</html>",
        dioxus::ssr::render(&dom)
    )
}

pub fn render_placeholder(page: PlaceholderPage) -> String {
    render_page(page.heading, page.active_page, Area::Admin, View::Placeholder(page))
}

pub fn render_loading() -> String {
    render_page("読み込み中", "", Area::App, View::Loading)
}

pub fn render_news_list(items: Vec<NewsItem>) -> String {
    render_page("お知らせ", "news", Area::App, View::NewsList(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn chrome_is_applied_exactly_once() {
        for html in [
            render_placeholder(SETTINGS_PAGE),
            render_loading(),
            render_news_list(vec![]),
        ] {
            assert_eq!(count(&html, "id=\"chrome\""), 1);
            assert_eq!(count(&html, "<body"), 1);
            assert_eq!(count(&html, "<head>"), 1);
        }
    }

    #[test]
    fn admin_pages_use_admin_frame() {
        let html = render_placeholder(USERS_PAGE);
        assert!(html.contains("admin-area"));
        assert!(!html.contains("app-area"));
    }

    #[test]
    fn app_pages_use_app_frame() {
        let html = render_loading();
        assert!(html.contains("app-area"));
        assert!(!html.contains("admin-area"));
    }

    #[test]
    fn active_nav_entry_is_highlighted() {
        let html = render_news_list(vec![]);
        assert_eq!(count(&html, "text-white bg-blue-600"), 1);
        assert!(html.contains("href=\"/news\" class=\"px-3 py-1.5 rounded text-sm text-white bg-blue-600\""));
    }

    #[test]
    fn document_starts_with_doctype() {
        let html = render_loading();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"ja\">"));
        assert!(html.ends_with("</html>"));
    }
}
