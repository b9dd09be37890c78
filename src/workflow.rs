use crate::domain::models::{PredictionResult, StudentRecord};
use crate::services::api::StudentService;
use crate::services::present::map_prediction;

/// View state of the three-step workflow. The error sub-state is carried in
/// `Workflow::error` and is only reachable from the two awaiting phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    Entry,
    AwaitingRecord,
    RecordLoaded,
    AwaitingPrediction,
    PredictionShown,
}

/// Client-side state machine for the prediction workflow: one record fetch,
/// then an optional prediction over the fetched record. Single-threaded; a
/// repeated predict overwrites the previous result (last write wins).
pub struct Workflow<'a> {
    service: &'a dyn StudentService,
    pub phase: WorkflowPhase,
    pub roll_number: Option<String>,
    pub record: Option<StudentRecord>,
    pub prediction: Option<PredictionResult>,
    pub error: Option<String>,
    pub predicting: bool,
}

impl<'a> Workflow<'a> {
    pub fn new(service: &'a dyn StudentService) -> Self {
        Self {
            service,
            phase: WorkflowPhase::Entry,
            roll_number: None,
            record: None,
            prediction: None,
            error: None,
            predicting: false,
        }
    }

    /// Entry → Details transition. The roll number travels only through this
    /// call; it is never persisted. Fires exactly one fetch per submission.
    /// On failure the phase falls back to `Entry`, so `RecordLoaded` is never
    /// reached with no record.
    pub fn submit_roll(&mut self, roll_number: &str) {
        self.roll_number = Some(roll_number.to_string());
        self.record = None;
        self.prediction = None;
        self.error = None;
        self.phase = WorkflowPhase::AwaitingRecord;

        match self.service.fetch_record(roll_number) {
            Ok(record) => {
                self.record = Some(record);
                self.phase = WorkflowPhase::RecordLoaded;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.phase = WorkflowPhase::Entry;
            }
        }
    }

    /// Requests a prediction for the loaded record. A no-op when no record is
    /// loaded. Clears the previous result and any displayed error before the
    /// call settles, so a stale result is never shown next to a new error.
    /// Failure returns to `RecordLoaded` with the record intact; the user can
    /// retry without re-fetching.
    pub fn request_prediction(&mut self) {
        let Some(record) = self.record.clone() else {
            return;
        };
        self.prediction = None;
        self.error = None;
        self.predicting = true;
        self.phase = WorkflowPhase::AwaitingPrediction;

        match self.service.predict(&record) {
            Ok(resp) => {
                self.prediction = Some(map_prediction(resp));
                self.phase = WorkflowPhase::PredictionShown;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.phase = WorkflowPhase::RecordLoaded;
            }
        }
        self.predicting = false;
    }

    /// "Predict for another student": back to the entry phase, dropping all
    /// transition-scoped state. Stored economic parameters are unaffected.
    pub fn reset(&mut self) {
        self.phase = WorkflowPhase::Entry;
        self.roll_number = None;
        self.record = None;
        self.prediction = None;
        self.error = None;
        self.predicting = false;
    }
}
