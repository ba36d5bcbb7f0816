//! Result shapes returned by the analytics API.
//!
//! Every field is optional: the dashboard only reads fields by name and a
//! missing one is shown as absent instead of failing the whole response.
//! Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Response of `POST /api/predict/crop-yield`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropYieldResult {
    /// Tonnes per hectare
    pub predicted_yield: Option<f64>,
    /// Model confidence in `[0, 1]`
    pub confidence_score: Option<f64>,
    pub recommendations: Option<Vec<String>>,
}

/// Response of `POST /api/analyze/soil-health`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoilHealthResult {
    /// Score out of 100
    pub health_score: Option<f64>,
    pub nutrient_status: Option<String>,
    pub fertilizer_recommendations: Option<Vec<String>>,
}

/// Response of `POST /api/detect/pest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PestDetectionResult {
    pub predicted_class: Option<String>,
    pub pest_probability: Option<f64>,
    pub disease_risk: Option<f64>,
    pub treatment_recommendations: Option<Vec<String>>,
}

/// Response of `POST /api/forecast/market-price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketPriceResult {
    pub labels: Option<Vec<String>>,
    pub predicted_prices: Option<Vec<f64>>,
}
