// Core structs: RawOffer, Nutrition, OutputFood, OutputDocument
use crate::utils::{deserialize_feed_date, deserialize_lenient_f64};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const BRAND: &str = "Mensa Westerberg";
pub const PORTION: f64 = 1.0;
pub const UNIT: &str = "meal";
pub const DOCUMENT_VERSION: u32 = 1;

/// Top-level shape of the food offer feed.
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub data: Vec<RawOffer>,
}

/// One entry of the feed. Only `alias` and `date` are required.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOffer {
    pub alias: String,
    #[serde(default)]
    pub food: Option<FoodRef>,
    #[serde(deserialize_with = "deserialize_feed_date")]
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

impl RawOffer {
    /// Image reference of the linked food, if it is present and non-empty.
    pub fn image(&self) -> Option<&str> {
        self.food
            .as_ref()
            .and_then(|f| f.image.as_deref())
            .filter(|img| !img.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodRef {
    #[serde(default)]
    pub image: Option<String>,
}

/// Nutrition values. Field names differ between the feed and the import file,
/// the `rename` pairs below are the full mapping.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Nutrition {
    #[serde(
        rename(deserialize = "calories_kcal", serialize = "calories"),
        default,
        deserialize_with = "deserialize_lenient_f64"
    )]
    pub calories: Option<f64>,
    #[serde(
        rename(deserialize = "carbohydrate_g", serialize = "carbohydrates"),
        default,
        deserialize_with = "deserialize_lenient_f64"
    )]
    pub carbohydrates: Option<f64>,
    #[serde(
        rename(deserialize = "sugar_g", serialize = "sugars"),
        default,
        deserialize_with = "deserialize_lenient_f64"
    )]
    pub sugars: Option<f64>,
    #[serde(
        rename(deserialize = "fat_g", serialize = "fat"),
        default,
        deserialize_with = "deserialize_lenient_f64"
    )]
    pub fat: Option<f64>,
    #[serde(
        rename(deserialize = "saturated_fat_g", serialize = "saturated-fat"),
        default,
        deserialize_with = "deserialize_lenient_f64"
    )]
    pub saturated_fat: Option<f64>,
    #[serde(
        rename(deserialize = "protein_g", serialize = "proteins"),
        default,
        deserialize_with = "deserialize_lenient_f64"
    )]
    pub proteins: Option<f64>,
    #[serde(
        rename(deserialize = "salt_g", serialize = "salt"),
        default,
        deserialize_with = "deserialize_lenient_f64"
    )]
    pub salt: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFood {
    pub name: String,
    pub image_url: Option<String>,
    pub brand: String,
    #[serde(rename = "uniqueId")]
    pub unique_id: String,
    pub portion: f64,
    pub unit: String,
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputDocument {
    pub version: u32,
    #[serde(rename = "foodList")]
    pub food_list: Vec<OutputFood>,
}

impl OutputDocument {
    pub fn new(food_list: Vec<OutputFood>) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            food_list,
        }
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub fetched: usize,
    pub skipped_without_calories: usize,
    pub written: usize,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Feed request to {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("Feed parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to serialize import document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
