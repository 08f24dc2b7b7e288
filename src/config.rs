use crate::model::ImportError;
use std::path::PathBuf;
use url::Url;

pub const FEED_URL: &str = r#"https://swosy.rocket-meals.de/rocket-meals/api/items/foodoffers?limit=-1&filter={"canteen":"fd99cdef-bb1d-4422-a48f-41310f652b3f","date":{"_gt":"today"}}&fields=*,food.image"#;
pub const ASSET_BASE_URL: &str = "https://swosy.rocket-meals.de/rocket-meals/api/assets/";
pub const OUTPUT_FILE: &str = "import.json";

#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub feed_url: String,
    pub asset_base_url: String,
    pub output_path: PathBuf,
    pub user_agent: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
            asset_base_url: ASSET_BASE_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
            user_agent: concat!("mensa-import/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ImportConfig {
    pub fn asset_base(&self) -> Result<Url, ImportError> {
        Ok(Url::parse(&self.asset_base_url)?)
    }
}
