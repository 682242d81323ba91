use dioxus::prelude::*;

use super::layout::BRAND;

/// Transient placeholder shown while an app-area page is being prepared.
#[allow(non_snake_case)]
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "loading flex flex-col items-center justify-center gap-4 py-24",
            span { class: "logo text-2xl font-bold tracking-widest text-blue-600", "{BRAND}" }
            div { class: "spinner h-10 w-10 rounded-full border-4 border-gray-200 border-t-blue-600 animate-spin" }
            p { class: "text-sm text-gray-500", "読み込み中..." }
        }
    }
}
