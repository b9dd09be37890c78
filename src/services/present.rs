use crate::domain::models::{DetailRow, Outcome, PredictionResult, StudentRecord};
use crate::services::api::PredictResponse;

/// Attributes eligible for display, in display order. Everything else in the
/// record stays hidden but is still sent on predict.
pub const DISPLAY_FIELDS: [&str; 14] = [
    "Marital Status",
    "Application Mode",
    "Daytime/evening attendance",
    "Previous qualification",
    "Previous qualification (grade)",
    "Age at enrollment",
    "Educational special needs",
    "Course",
    "Admission grade",
    "International",
    "Curricular units 1st sem (enrolled)",
    "Curricular units 2nd sem (enrolled)",
    "Curricular units 1st sem (grade)",
    "Curricular units 2nd sem (grade)",
];

/// Friendlier display text for a subset of keys; the rest show their raw
/// attribute name.
pub fn field_label(key: &str) -> &str {
    match key {
        "Daytime/evening attendance" => "Daytime/Evening Attendance",
        "Previous qualification" => "Previous Qualification",
        "Previous qualification (grade)" => "Previous Qualification Grade",
        "Age at enrollment" => "Age at Enrollment",
        "Educational special needs" => "Special Needs",
        "Admission grade" => "Admission Grade",
        "International" => "International Student",
        "Curricular units 1st sem (enrolled)" => "1st Sem Enrolled Units",
        "Curricular units 2nd sem (enrolled)" => "2nd Sem Enrolled Units",
        "Curricular units 1st sem (grade)" => "1st Sem Grade",
        "Curricular units 2nd sem (grade)" => "2nd Sem Grade",
        other => other,
    }
}

/// Projects the open record down to the whitelisted rows, in whitelist order
/// regardless of the record's native key order.
pub fn visible_fields(record: &StudentRecord) -> Vec<DetailRow> {
    DISPLAY_FIELDS
        .iter()
        .filter_map(|key| {
            record.get(*key).map(|value| DetailRow {
                label: field_label(key).to_string(),
                value: value.clone(),
            })
        })
        .collect()
}

/// Normalizes the raw response. `prediction == 1` means dropout, anything
/// else graduates; the mapping is exact, never a confidence threshold.
pub fn map_prediction(resp: PredictResponse) -> PredictionResult {
    let outcome = if resp.prediction == 1 {
        Outcome::Dropout
    } else {
        Outcome::Graduate
    };
    PredictionResult {
        outcome,
        confidence: resp.confidence,
        overall_accuracy: resp.overall_accuracy,
        justification: resp.justification,
        fairness_metrics: resp.fairness_metrics,
    }
}
