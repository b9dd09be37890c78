use crate::domain::models::{FairnessMetric, StudentRecord};
use serde::Deserialize;
use std::time::Duration;

const FETCH_FAILED: &str = "Failed to fetch student";
const PREDICT_FAILED: &str = "Prediction failed";

/// Raw prediction response as the service sends it. Normalization into the
/// view model happens in `present::map_prediction`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub prediction: i64,
    pub confidence: f64,
    #[serde(default)]
    pub overall_accuracy: Option<f64>,
    #[serde(default)]
    pub justification: Vec<String>,
    #[serde(default)]
    pub fairness_metrics: Vec<FairnessMetric>,
}

/// Remote-call failures, already carrying the user-facing message. The
/// caller does not distinguish the two beyond displaying the text.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Non-2xx with an `{"error": ...}` body.
    #[error("{0}")]
    Service(String),
    /// Network failure, or a response body that could not be decoded.
    #[error("{0}")]
    Transport(String),
}

/// Seam between the workflow controller and the network. Tests substitute a
/// scripted fake.
pub trait StudentService {
    fn fetch_record(&self, roll_number: &str) -> Result<StudentRecord, ApiError>;
    fn predict(&self, record: &StudentRecord) -> Result<PredictResponse, ApiError>;
}

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: String, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { http, base })
    }
}

impl StudentService for ApiClient {
    fn fetch_record(&self, roll_number: &str) -> Result<StudentRecord, ApiError> {
        let url = format!("{}/get_student/{}", self.base, roll_number);
        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|_| ApiError::Transport(FETCH_FAILED.to_string()))?;
        if !resp.status().is_success() {
            return Err(error_from_body(resp, FETCH_FAILED));
        }
        resp.json::<StudentRecord>()
            .map_err(|_| ApiError::Transport(FETCH_FAILED.to_string()))
    }

    fn predict(&self, record: &StudentRecord) -> Result<PredictResponse, ApiError> {
        let url = format!("{}/predict", self.base);
        let resp = self
            .http
            .post(url)
            .json(record)
            .send()
            .map_err(|_| ApiError::Transport(PREDICT_FAILED.to_string()))?;
        if !resp.status().is_success() {
            return Err(error_from_body(resp, PREDICT_FAILED));
        }
        resp.json::<PredictResponse>()
            .map_err(|_| ApiError::Transport(PREDICT_FAILED.to_string()))
    }
}

/// Extracts the service's `error` field when the body parses; otherwise the
/// generic per-call message stands in.
fn error_from_body(resp: reqwest::blocking::Response, fallback: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match resp.json::<ErrorBody>() {
        Ok(body) => ApiError::Service(body.error),
        Err(_) => ApiError::Transport(fallback.to_string()),
    }
}
