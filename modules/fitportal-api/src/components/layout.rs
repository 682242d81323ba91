use dioxus::prelude::*;

use super::{render_view, View};

pub const BRAND: &str = "FIT PORTAL";

struct NavItem {
    key: &'static str,
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: "admin", label: "管理トップ", href: "/admin" },
    NavItem { key: "users", label: "ユーザー", href: "/admin/users" },
    NavItem { key: "settings", label: "設定", href: "/admin/settings" },
    NavItem { key: "news", label: "お知らせ", href: "/news" },
];

/// Sub-area a page belongs to. Each area frames its content differently but
/// none of them carries chrome of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Admin,
    App,
}

/// Wrap page content in the shared chrome: document head, brand header and
/// navigation. Applied once per document, by [`Document`].
pub fn wrap_with_chrome(title: &str, active_page: &str, content: Element) -> Element {
    let full_title = format!("{title} | {BRAND}");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gray-50 font-sans text-gray-900",
            header { id: "chrome", class: "bg-gray-900 text-white",
                div { class: "max-w-5xl mx-auto flex items-center gap-6 px-6 py-3",
                    a { href: "/", class: "text-lg font-semibold tracking-wide no-underline text-white",
                        "{BRAND}"
                    }
                    nav { class: "flex gap-1",
                        for item in NAV_ITEMS.iter() {
                            {
                                let class = if item.key == active_page {
                                    "px-3 py-1.5 rounded text-sm text-white bg-blue-600"
                                } else {
                                    "px-3 py-1.5 rounded text-sm text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                                };
                                let href = item.href;
                                let label = item.label;
                                rsx! { a { href: href, class: class, "{label}" } }
                            }
                        }
                    }
                }
            }
            main { {content} }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn AreaFrame(area: Area, children: Element) -> Element {
    let class = match area {
        Area::Admin => "admin-area max-w-4xl mx-auto p-6",
        Area::App => "app-area max-w-3xl mx-auto px-4 py-8",
    };
    rsx! {
        div { class: class, {children} }
    }
}

/// Root of every rendered page: the view, framed by its area, inside the
/// chrome.
#[allow(non_snake_case)]
#[component]
pub fn Document(title: String, active_page: String, area: Area, view: View) -> Element {
    let content = rsx! {
        AreaFrame { area: area, {render_view(&view)} }
    };
    wrap_with_chrome(&title, &active_page, content)
}
