use common::{
    CropYieldResult, FormKind, FormPayload, MarketPriceResult, PestDetectionResult,
    SoilHealthResult,
};
use web_sys::FormData;

use crate::api_client;

pub async fn predict_crop_yield(payload: &FormPayload) -> Result<CropYieldResult, String> {
    log::trace!("Requesting crop yield prediction");
    let result = api_client::post_json(FormKind::CropYield.endpoint(), payload).await;

    if let Err(ref e) = result {
        log::error!("Crop yield prediction failed: {}", e);
    }

    result
}

pub async fn analyze_soil_health(payload: &FormPayload) -> Result<SoilHealthResult, String> {
    log::trace!("Requesting soil health analysis");
    let result = api_client::post_json(FormKind::SoilHealth.endpoint(), payload).await;

    if let Err(ref e) = result {
        log::error!("Soil health analysis failed: {}", e);
    }

    result
}

/// The form data goes out untouched, file fields included.
pub async fn detect_pest(form_data: FormData) -> Result<PestDetectionResult, String> {
    log::trace!("Uploading pest detection form");
    let result = api_client::post_form(FormKind::PestDetection.endpoint(), form_data).await;

    if let Err(ref e) = result {
        log::error!("Pest detection failed: {}", e);
    }

    result
}

pub async fn forecast_market_price(payload: &FormPayload) -> Result<MarketPriceResult, String> {
    log::trace!("Requesting market price forecast");
    let result: Result<MarketPriceResult, String> =
        api_client::post_json(FormKind::MarketPrice.endpoint(), payload).await;

    match result {
        Ok(ref forecast) => log::debug!(
            "Market forecast returned {} prices",
            forecast.predicted_prices.as_ref().map_or(0, Vec::len)
        ),
        Err(ref e) => log::error!("Market price forecast failed: {}", e),
    }

    result
}
