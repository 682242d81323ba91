use dioxus::prelude::*;

use crate::navigation::ADMIN_HOME;

/// A static admin page that has no content yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderPage {
    pub heading: &'static str,
    pub description: &'static str,
    pub active_page: &'static str,
    pub back_href: &'static str,
}

pub const SETTINGS_PAGE: PlaceholderPage = PlaceholderPage {
    heading: "設定",
    description: "システム設定は現在準備中です。",
    active_page: "settings",
    back_href: ADMIN_HOME,
};

pub const USERS_PAGE: PlaceholderPage = PlaceholderPage {
    heading: "ユーザー",
    description: "ユーザー管理は現在準備中です。",
    active_page: "users",
    back_href: ADMIN_HOME,
};

#[allow(non_snake_case)]
#[component]
pub fn Placeholder(heading: String, description: String, back_href: String) -> Element {
    rsx! {
        h1 { class: "text-2xl font-semibold mb-2", "{heading}" }
        p { class: "text-gray-500 text-sm mb-6", "{description}" }
        a { href: "{back_href}", class: "back-link text-sm text-blue-600 hover:text-blue-800",
            "← 管理トップへ戻る"
        }
    }
}
