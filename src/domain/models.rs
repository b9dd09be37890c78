use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Macro-economic context captured on the entry form. Persisted across runs;
/// the stored JSON keys match the wire spelling (`unemploymentRate`,
/// `inflationRate`, `GDP`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicParameters {
    #[serde(rename = "unemploymentRate", default = "default_unemployment_rate")]
    pub unemployment_rate: f64,
    #[serde(rename = "inflationRate", default = "default_inflation_rate")]
    pub inflation_rate: f64,
    #[serde(rename = "GDP", default = "default_gdp")]
    pub gdp: f64,
}

fn default_unemployment_rate() -> f64 {
    7.5
}

fn default_inflation_rate() -> f64 {
    6.2
}

fn default_gdp() -> f64 {
    5.2
}

impl Default for EconomicParameters {
    fn default() -> Self {
        Self {
            unemployment_rate: default_unemployment_rate(),
            inflation_rate: default_inflation_rate(),
            gdp: default_gdp(),
        }
    }
}

/// In-memory entry-form state. The roll number is session-transient and is
/// never written to the parameter store.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub roll_number: String,
    pub params: EconomicParameters,
    pub editable: bool,
}

/// Open attribute map fetched from the remote service. The client never
/// assumes a fixed schema beyond the display whitelist.
pub type StudentRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Dropout,
    Graduate,
}

impl Outcome {
    pub fn headline(&self) -> &'static str {
        match self {
            Outcome::Dropout => "Likely to Dropout",
            Outcome::Graduate => "Likely to Graduate",
        }
    }
}

/// Per-group disparity statistic reported after bias mitigation. The rate
/// arrives as either a number or preformatted text depending on the model
/// server version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FairnessMetric {
    pub group: String,
    pub difference_in_dropout_rate: MetricValue,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Normalized prediction view model. Built fresh on every successful call;
/// `justification` and `fairness_metrics` are always present, empty when the
/// response omitted them.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub outcome: Outcome,
    pub confidence: f64,
    pub overall_accuracy: Option<f64>,
    pub justification: Vec<String>,
    pub fairness_metrics: Vec<FairnessMetric>,
}

/// One whitelisted record attribute, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct DetailRow {
    pub label: String,
    pub value: serde_json::Value,
}

#[derive(Serialize)]
pub struct StudentDetails {
    pub roll_number: String,
    pub fields: Vec<DetailRow>,
}

#[derive(Serialize)]
pub struct PredictReport {
    pub details: StudentDetails,
    pub prediction: PredictionResult,
}
