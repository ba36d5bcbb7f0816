//! Text content of the result panels.
//!
//! Results are turned into lines of plain text segments rather than an HTML
//! string. The frontend renders segments as text nodes, so markup coming back
//! from the API is displayed literally instead of being injected.

use crate::results::{CropYieldResult, MarketPriceResult, PestDetectionResult, SoilHealthResult};

/// Placeholder for a field the API did not return.
pub const MISSING: &str = "n/a";

/// Alert colour of a result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Primary,
    Danger,
    Warning,
    Error,
}

impl Tone {
    pub fn alert_class(self) -> &'static str {
        match self {
            Tone::Success => "alert-success",
            Tone::Primary => "alert-primary",
            Tone::Danger => "alert-danger",
            Tone::Warning => "alert-warning",
            Tone::Error => "alert-dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Emphasised value
    Strong(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(text) | Segment::Strong(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultLine(pub Vec<Segment>);

impl ResultLine {
    fn text(text: impl Into<String>) -> Self {
        Self(vec![Segment::Text(text.into())])
    }

    fn labelled(label: &str, value: String, suffix: &str) -> Self {
        let mut segments = vec![Segment::Text(label.to_string()), Segment::Strong(value)];
        if !suffix.is_empty() {
            segments.push(Segment::Text(suffix.to_string()));
        }
        Self(segments)
    }

    pub fn plain_text(&self) -> String {
        self.0.iter().map(Segment::as_str).collect()
    }
}

/// Everything a result panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub tone: Tone,
    pub lines: Vec<ResultLine>,
}

impl ResultView {
    pub fn crop_yield(result: &CropYieldResult) -> Self {
        let mut lines = vec![ResultLine::labelled(
            "Predicted yield: ",
            format_number(result.predicted_yield),
            &format!(" t/ha (confidence {})", format_percent(result.confidence_score)),
        )];
        push_recommendations(&mut lines, result.recommendations.as_deref());
        Self { tone: Tone::Success, lines }
    }

    pub fn soil_health(result: &SoilHealthResult) -> Self {
        let mut lines = vec![
            ResultLine::labelled("Health score: ", format_number(result.health_score), " / 100"),
            ResultLine::text(format!(
                "Status: {}",
                result.nutrient_status.as_deref().unwrap_or(MISSING)
            )),
        ];
        push_recommendations(&mut lines, result.fertilizer_recommendations.as_deref());
        Self { tone: Tone::Primary, lines }
    }

    pub fn pest_detection(result: &PestDetectionResult) -> Self {
        let class = result.predicted_class.clone().unwrap_or_else(|| MISSING.to_string());
        let mut lines = vec![
            ResultLine::labelled("Detected: ", class, ""),
            ResultLine::text(format!("Pest prob: {}", format_percent(result.pest_probability))),
            ResultLine::text(format!("Disease risk: {}", format_percent(result.disease_risk))),
        ];
        push_recommendations(&mut lines, result.treatment_recommendations.as_deref());
        Self { tone: Tone::Danger, lines }
    }

    pub fn market_price(_result: &MarketPriceResult) -> Self {
        Self {
            tone: Tone::Warning,
            lines: vec![ResultLine::text("Forecast generated for next 12 months.")],
        }
    }

    /// Panel shown when a submission could not produce a result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            lines: vec![ResultLine::text(message)],
        }
    }

    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(ResultLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn push_recommendations(lines: &mut Vec<ResultLine>, recommendations: Option<&[String]>) {
    lines.extend(
        recommendations
            .unwrap_or_default()
            .iter()
            .map(|r| ResultLine::text(r.clone())),
    );
}

/// Shortest round-trip form: `5.2` → "5.2", `5.0` → "5".
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING.to_string(),
    }
}

/// Fraction as a whole percentage: `0.8` → "80%".
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", (v * 100.0).round()),
        None => MISSING.to_string(),
    }
}
