use dioxus::prelude::*;

use fitportal_common::{format_date, NewsItem};

const EXCERPT_CHARS: usize = 80;
const ELLIPSIS: &str = "…";

/// First 80 characters of a news body, with an ellipsis only when something
/// was cut.
pub fn excerpt(body: &str) -> String {
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &body[..cut]),
        None => body.to_string(),
    }
}

/// Clickable summary of a news item, linking to its detail page.
#[allow(non_snake_case)]
#[component]
pub fn NewsCard(item: NewsItem) -> Element {
    let date = format_date(item.display_date());
    let href = item.detail_path();
    let summary = item.body.as_deref().map(excerpt);
    rsx! {
        a { href: "{href}", class: "news-card block bg-white border border-gray-200 rounded-lg p-4 no-underline hover:border-gray-400",
            div { class: "flex gap-2 items-center text-xs text-gray-400",
                if !date.is_empty() {
                    time { class: "news-date", "{date}" }
                }
                if let Some(tag) = &item.tag {
                    span { class: "news-tag inline-block px-2 py-0.5 rounded-full font-semibold bg-blue-50 text-blue-800",
                        "{tag}"
                    }
                }
            }
            h3 { class: "text-base mt-1 text-gray-900", "{item.title}" }
            if let Some(summary) = &summary {
                p { class: "news-excerpt text-sm text-gray-500 mt-1", "{summary}" }
            }
        }
    }
}
