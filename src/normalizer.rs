use crate::model::{BRAND, ImportError, OutputFood, PORTION, RawOffer, UNIT};
use crate::utils::{resolve_image_url, stable_id};
use url::Url;

pub fn normalize_all(offers: &[RawOffer], asset_base: &Url) -> Result<Vec<OutputFood>, ImportError> {
    offers
        .iter()
        .map(|offer| to_output_food(offer, asset_base))
        .collect()
}

pub fn to_output_food(offer: &RawOffer, asset_base: &Url) -> Result<OutputFood, ImportError> {
    let image_url = offer
        .image()
        .map(|image| resolve_image_url(asset_base, image))
        .transpose()?;

    Ok(OutputFood {
        name: offer.alias.clone(),
        image_url,
        brand: BRAND.to_string(),
        unique_id: stable_id(&offer.alias),
        portion: PORTION,
        unit: UNIT.to_string(),
        nutrition: offer.nutrition.clone(),
    })
}
