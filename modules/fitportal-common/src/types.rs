use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::PortalError;

// --- News ---

/// A news record as supplied by the news source. Every field but the id and
/// title is optional and degrades to omission when rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub news_id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl NewsItem {
    /// The raw date shown on a card: the start date, falling back to the
    /// last update.
    pub fn display_date(&self) -> Option<&str> {
        self.start_date
            .as_deref()
            .or(self.updated_at.as_deref())
    }

    pub fn detail_path(&self) -> String {
        format!("/news/{}", self.news_id)
    }
}

// --- Admin masters ---

/// Lookup tables for the admin screens. Constant for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterData {
    pub brands: Vec<String>,
    pub business_types_by_brand: BTreeMap<String, Vec<String>>,
    pub companies: Vec<String>,
    pub corporates: Vec<String>,
}

impl MasterData {
    /// The compiled-in master tables.
    pub fn builtin() -> Self {
        let business_types_by_brand = BTreeMap::from([
            (
                "JOYFIT".to_string(),
                strings(&["JOYFIT24", "JOYFIT", "JOYFIT YOGA", "JOYFIT+"]),
            ),
            ("FIT365".to_string(), strings(&["FIT365"])),
        ]);

        Self {
            brands: strings(&["JOYFIT", "FIT365"]),
            business_types_by_brand,
            companies: strings(&[
                "本部",
                "東日本事業部",
                "西日本事業部",
                "フランチャイズ事業部",
            ]),
            corporates: strings(&[
                "法人会員A",
                "法人会員B",
                "法人会員C",
                "法人会員D",
            ]),
        }
    }

    /// Load master tables from a JSON file in the same shape the API serves.
    pub fn from_path(path: &Path) -> Result<Self, PortalError> {
        load_json(path)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// --- Ranking ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResponse<T> {
    pub ok: bool,
    pub items: Vec<T>,
}

impl<T> RankingResponse<T> {
    pub fn empty() -> Self {
        Self {
            ok: true,
            items: Vec::new(),
        }
    }
}

// --- Helpers ---

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, PortalError> {
    let raw = std::fs::read_to_string(path).map_err(|source| PortalError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| PortalError::Json {
        path: path.display().to_string(),
        source,
    })
}
