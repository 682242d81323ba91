use dioxus::prelude::*;

use fitportal_common::NewsItem;

use super::news_card::NewsCard;

#[allow(non_snake_case)]
#[component]
pub fn NewsList(items: Vec<NewsItem>) -> Element {
    rsx! {
        h1 { class: "text-2xl font-semibold mb-4", "お知らせ" }
        if items.is_empty() {
            p { class: "text-gray-400 text-center py-10", "現在お知らせはありません。" }
        }
        div { class: "flex flex-col gap-3",
            for item in items.iter() {
                NewsCard { key: "{item.news_id}", item: item.clone() }
            }
        }
    }
}
