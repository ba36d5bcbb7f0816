use serde::{Deserialize, Serialize};

/// The four forms on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    CropYield,
    SoilHealth,
    PestDetection,
    MarketPrice,
}

/// How a form's payload travels to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEncoding {
    /// `application/json` body built from the coerced payload
    Json,
    /// Raw browser form data, boundary assigned by the browser
    Multipart,
}

/// Input widget used when the host renders a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Text,
    TextArea,
    File,
}

/// A single field of a dashboard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

impl FieldSpec {
    const fn number(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Number, placeholder }
    }

    const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, placeholder }
    }
}

const CROP_YIELD_NUMERIC: &[&str] = &[
    "temperature",
    "humidity",
    "rainfall",
    "fertilizer_amount",
    "irrigation_frequency",
];

const SOIL_HEALTH_NUMERIC: &[&str] = &[
    "pH",
    "nitrogen",
    "phosphorus",
    "potassium",
    "organic_matter",
    "moisture",
];

const CROP_YIELD_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("crop_type", "Crop type", "wheat"),
    FieldSpec::number("temperature", "Temperature (°C)", "25"),
    FieldSpec::number("humidity", "Humidity (%)", "60"),
    FieldSpec::number("rainfall", "Rainfall (mm)", "120"),
    FieldSpec::number("fertilizer_amount", "Fertilizer (kg/ha)", "150"),
    FieldSpec::number("irrigation_frequency", "Irrigation (per week)", "3"),
];

const SOIL_HEALTH_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("pH", "pH", "6.5"),
    FieldSpec::number("nitrogen", "Nitrogen", "40"),
    FieldSpec::number("phosphorus", "Phosphorus", "30"),
    FieldSpec::number("potassium", "Potassium", "35"),
    FieldSpec::number("organic_matter", "Organic matter (%)", "3"),
    FieldSpec::number("moisture", "Moisture (%)", "25"),
];

const PEST_DETECTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("crop_type", "Crop type", "tomato"),
    FieldSpec::text("symptoms", "Symptoms", "yellow leaves, spots"),
    FieldSpec::text("environmental_conditions", "Conditions", "humid, warm"),
    FieldSpec { name: "image", label: "Leaf image", kind: FieldKind::File, placeholder: "" },
];

const MARKET_PRICE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("crop_type", "Crop type", "maize"),
    FieldSpec::text("location", "Market", "Nairobi"),
    FieldSpec {
        name: "historical_data",
        label: "Historical prices (JSON array)",
        kind: FieldKind::TextArea,
        placeholder: "[210.5, 214.0, 220.25]",
    },
];

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::CropYield,
        FormKind::SoilHealth,
        FormKind::PestDetection,
        FormKind::MarketPrice,
    ];

    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::CropYield => "cropYieldForm",
            FormKind::SoilHealth => "soilHealthForm",
            FormKind::PestDetection => "pestDetectionForm",
            FormKind::MarketPrice => "marketPriceForm",
        }
    }

    pub fn result_id(self) -> &'static str {
        match self {
            FormKind::CropYield => "cropYieldResult",
            FormKind::SoilHealth => "soilHealthResult",
            FormKind::PestDetection => "pestDetectionResult",
            FormKind::MarketPrice => "marketPriceResult",
        }
    }

    pub fn chart_id(self) -> &'static str {
        match self {
            FormKind::CropYield => "cropYieldCharts",
            FormKind::SoilHealth => "soilHealthCharts",
            FormKind::PestDetection => "pestDetectionCharts",
            FormKind::MarketPrice => "marketPriceCharts",
        }
    }

    /// API path the form posts to, relative to the API base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::CropYield => "/api/predict/crop-yield",
            FormKind::SoilHealth => "/api/analyze/soil-health",
            FormKind::PestDetection => "/api/detect/pest",
            FormKind::MarketPrice => "/api/forecast/market-price",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::CropYield => "Crop Yield Prediction",
            FormKind::SoilHealth => "Soil Health Analysis",
            FormKind::PestDetection => "Pest & Disease Detection",
            FormKind::MarketPrice => "Market Price Forecast",
        }
    }

    pub fn encoding(self) -> RequestEncoding {
        match self {
            FormKind::PestDetection => RequestEncoding::Multipart,
            _ => RequestEncoding::Json,
        }
    }

    /// Fields coerced from text to floating point before sending.
    pub fn numeric_fields(self) -> &'static [&'static str] {
        match self {
            FormKind::CropYield => CROP_YIELD_NUMERIC,
            FormKind::SoilHealth => SOIL_HEALTH_NUMERIC,
            FormKind::PestDetection | FormKind::MarketPrice => &[],
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::CropYield => CROP_YIELD_FIELDS,
            FormKind::SoilHealth => SOIL_HEALTH_FIELDS,
            FormKind::PestDetection => PEST_DETECTION_FIELDS,
            FormKind::MarketPrice => MARKET_PRICE_FIELDS,
        }
    }
}
