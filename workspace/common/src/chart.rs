//! Chart specifications handed to `Plotly.newPlot`.
//!
//! A spec is built fresh for every draw and fully describes the chart, so
//! drawing it replaces whatever the container showed before.

use plotly::common::{Line, Marker, Mode, Title};
use plotly::{Bar, Layout, Scatter};
use serde::Serialize;
use serde_json::{Value, json};

use crate::dom::FormKind;
use crate::payload::FormPayload;
use crate::results::{CropYieldResult, MarketPriceResult, PestDetectionResult};

const CROP_FACTOR_LABELS: [&str; 5] = ["Temp", "Humidity", "Rainfall", "Fertilizer", "Irrigation"];
const SOIL_NUTRIENT_LABELS: [&str; 6] = ["pH", "N", "P", "K", "OM", "Moisture"];
const RISK_LABELS: [&str; 3] = ["Healthy", "Pest", "Disease"];

/// Headroom above the largest nutrient value on the radar chart.
const RADIAL_HEADROOM: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// DOM id of the element Plotly draws into
    pub container_id: &'static str,
    pub data: Vec<Value>,
    pub layout: Value,
}

fn to_value<T: Serialize>(item: &T) -> Value {
    serde_json::to_value(item).unwrap_or(Value::Null)
}

fn payload_numbers(payload: &FormPayload, fields: &[&str]) -> Vec<Option<f64>> {
    fields
        .iter()
        .map(|field| payload.get(*field).and_then(Value::as_f64))
        .collect()
}

/// The crop chart is only drawn when a non-zero yield came back.
pub fn should_draw_crop_chart(result: &CropYieldResult) -> bool {
    result.predicted_yield.is_some_and(|y| y != 0.0)
}

/// Bar chart of the five growing factors that were submitted.
pub fn crop_yield_chart(payload: &FormPayload) -> ChartSpec {
    let labels: Vec<String> = CROP_FACTOR_LABELS.iter().map(|l| l.to_string()).collect();
    let values = payload_numbers(payload, FormKind::CropYield.numeric_fields());

    let trace = Bar::new(labels, values).marker(Marker::new().color("#2e7d32"));
    let layout = Layout::new().title(Title::with_text("Factors"));

    ChartSpec {
        container_id: FormKind::CropYield.chart_id(),
        data: vec![to_value(&trace)],
        layout: to_value(&layout),
    }
}

/// Radar chart of the six soil readings that were submitted.
///
/// The radial axis runs from 0 to 1.2 × the largest reading. When a reading
/// is missing the range is left to Plotly.
pub fn soil_health_chart(payload: &FormPayload) -> ChartSpec {
    let values = payload_numbers(payload, FormKind::SoilHealth.numeric_fields());

    let mut radial_axis = json!({ "visible": true });
    if let Some(max) = radial_max(&values) {
        radial_axis["range"] = json!([0.0, max]);
    }

    let data = vec![json!({
        "type": "scatterpolar",
        "r": values,
        "theta": SOIL_NUTRIENT_LABELS,
        "fill": "toself",
        "name": "Soil"
    })];
    let layout = json!({
        "polar": { "radialaxis": radial_axis },
        "showlegend": false,
        "title": { "text": "Nutrient Radar" }
    });

    ChartSpec {
        container_id: FormKind::SoilHealth.chart_id(),
        data,
        layout,
    }
}

/// Upper bound of the radar's radial axis, `None` if any value is missing.
pub fn radial_max(values: &[Option<f64>]) -> Option<f64> {
    let values: Vec<f64> = values.iter().copied().collect::<Option<_>>()?;
    values
        .into_iter()
        .reduce(f64::max)
        .map(|max| max * RADIAL_HEADROOM)
}

/// Share of the pie left for "Healthy".
///
/// Never negative: probabilities summing past 1 leave an empty segment.
pub fn healthy_share(result: &PestDetectionResult) -> Option<f64> {
    let pest = result.pest_probability?;
    let disease = result.disease_risk?;
    Some((1.0 - pest - disease).max(0.0))
}

/// Pie chart splitting healthy, pest and disease probability.
pub fn pest_detection_chart(result: &PestDetectionResult) -> ChartSpec {
    let values = [healthy_share(result), result.pest_probability, result.disease_risk];

    let data = vec![json!({
        "type": "pie",
        "values": values,
        "labels": RISK_LABELS
    })];
    let layout = json!({ "title": { "text": "Risk Assessment" } });

    ChartSpec {
        container_id: FormKind::PestDetection.chart_id(),
        data,
        layout,
    }
}

/// Line chart of the forecast prices against their labels.
pub fn market_price_chart(result: &MarketPriceResult) -> ChartSpec {
    let labels = result.labels.clone().unwrap_or_default();
    let prices = result.predicted_prices.clone().unwrap_or_default();

    let trace = Scatter::new(labels, prices)
        .mode(Mode::LinesMarkers)
        .line(Line::new().color("#1565c0"));
    let layout = Layout::new().title(Title::with_text("Price Trend (Next 12 months)"));

    ChartSpec {
        container_id: FormKind::MarketPrice.chart_id(),
        data: vec![to_value(&trace)],
        layout: to_value(&layout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{FieldValue, build_payload};

    fn payload(kind: FormKind, values: &[(&str, &str)]) -> FormPayload {
        build_payload(
            kind,
            values
                .iter()
                .map(|(k, v)| (k.to_string(), FieldValue::Text(v.to_string()))),
        )
    }

    #[test]
    fn crop_chart_plots_submitted_factors() {
        let payload = payload(
            FormKind::CropYield,
            &[
                ("temperature", "25"),
                ("humidity", "60"),
                ("rainfall", "120.5"),
                ("fertilizer_amount", "150"),
                ("irrigation_frequency", "3"),
            ],
        );

        let spec = crop_yield_chart(&payload);

        assert_eq!(spec.container_id, "cropYieldCharts");
        assert_eq!(spec.data.len(), 1);
        let trace = &spec.data[0];
        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["x"], json!(CROP_FACTOR_LABELS));
        assert_eq!(trace["y"], json!([25.0, 60.0, 120.5, 150.0, 3.0]));
        assert_eq!(trace["marker"]["color"], "#2e7d32");
        assert_eq!(spec.layout["title"]["text"], "Factors");
    }

    #[test]
    fn crop_chart_needs_non_zero_yield() {
        let mut result = CropYieldResult::default();
        assert!(!should_draw_crop_chart(&result));
        result.predicted_yield = Some(0.0);
        assert!(!should_draw_crop_chart(&result));
        result.predicted_yield = Some(4.1);
        assert!(should_draw_crop_chart(&result));
    }

    #[test]
    fn soil_radial_axis_tops_out_at_120_percent_of_max() {
        let payload = payload(
            FormKind::SoilHealth,
            &[
                ("pH", "6.5"),
                ("nitrogen", "40"),
                ("phosphorus", "30"),
                ("potassium", "55"),
                ("organic_matter", "3"),
                ("moisture", "25"),
            ],
        );

        let spec = soil_health_chart(&payload);

        assert_eq!(spec.container_id, "soilHealthCharts");
        assert_eq!(spec.data[0]["type"], "scatterpolar");
        assert_eq!(spec.data[0]["theta"], json!(SOIL_NUTRIENT_LABELS));
        assert_eq!(spec.data[0]["fill"], "toself");
        let range = &spec.layout["polar"]["radialaxis"]["range"];
        assert_eq!(range[0], 0.0);
        assert!((range[1].as_f64().unwrap() - 66.0).abs() < 1e-9);
        assert_eq!(spec.layout["showlegend"], false);
    }

    #[test]
    fn radial_max_for_various_inputs() {
        let cases: [[f64; 6]; 3] = [
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            [0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
            [10.0, -2.0, 0.0, 7.5, 3.25, 9.99],
        ];
        for case in cases {
            let values: Vec<Option<f64>> = case.iter().copied().map(Some).collect();
            let max = case.iter().copied().fold(f64::MIN, f64::max);
            assert_eq!(radial_max(&values), Some(max * 1.2));
        }
    }

    #[test]
    fn soil_chart_without_complete_readings_leaves_range_to_plotly() {
        let payload = payload(FormKind::SoilHealth, &[("pH", "6.5"), ("nitrogen", "lots")]);

        let spec = soil_health_chart(&payload);

        assert!(spec.layout["polar"]["radialaxis"].get("range").is_none());
        assert_eq!(spec.data[0]["r"][1], Value::Null);
    }

    #[test]
    fn pest_pie_healthy_share_is_remainder() {
        let result = PestDetectionResult {
            pest_probability: Some(0.3),
            disease_risk: Some(0.2),
            ..Default::default()
        };

        let share = healthy_share(&result).unwrap();
        assert!((share - 0.5).abs() < 1e-12);

        let spec = pest_detection_chart(&result);
        assert_eq!(spec.container_id, "pestDetectionCharts");
        assert_eq!(spec.data[0]["type"], "pie");
        assert_eq!(spec.data[0]["labels"], json!(RISK_LABELS));
        assert_eq!(spec.data[0]["values"][1], 0.3);
        assert_eq!(spec.data[0]["values"][2], 0.2);
        assert_eq!(spec.layout["title"]["text"], "Risk Assessment");
    }

    #[test]
    fn pest_healthy_share_never_goes_negative() {
        let result = PestDetectionResult {
            pest_probability: Some(0.7),
            disease_risk: Some(0.6),
            ..Default::default()
        };
        assert_eq!(healthy_share(&result), Some(0.0));

        let missing = PestDetectionResult {
            pest_probability: Some(0.7),
            ..Default::default()
        };
        assert_eq!(healthy_share(&missing), None);
    }

    #[test]
    fn market_chart_plots_prices_against_labels() {
        let result = MarketPriceResult {
            labels: Some(vec!["Jan".to_string(), "Feb".to_string(), "Mar".to_string()]),
            predicted_prices: Some(vec![210.0, 214.5, 220.25]),
        };

        let spec = market_price_chart(&result);

        assert_eq!(spec.container_id, "marketPriceCharts");
        let trace = &spec.data[0];
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["mode"], "lines+markers");
        assert_eq!(trace["x"], json!(["Jan", "Feb", "Mar"]));
        assert_eq!(trace["y"], json!([210.0, 214.5, 220.25]));
        assert_eq!(trace["line"]["color"], "#1565c0");
        assert_eq!(spec.layout["title"]["text"], "Price Trend (Next 12 months)");
    }
}
