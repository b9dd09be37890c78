use crate::domain::models::EconomicParameters;
use std::path::PathBuf;

/// Durable storage for the economic parameters. Injected as a trait so tests
/// can substitute an in-memory fake.
pub trait ParamStore {
    /// Returns the stored parameters, or defaults when nothing is stored or
    /// the stored value is malformed. Never raises.
    fn load(&self) -> EconomicParameters;
    fn save(&self, params: &EconomicParameters) -> anyhow::Result<()>;
}

pub struct FileParamStore {
    path: PathBuf,
}

impl FileParamStore {
    pub fn default_location() -> anyhow::Result<Self> {
        let home = std::env::var("HOME")?;
        Ok(Self {
            path: PathBuf::from(home).join(".config/dropsight/economic_params.json"),
        })
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ParamStore for FileParamStore {
    fn load(&self) -> EconomicParameters {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return EconomicParameters::default(),
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn save(&self, params: &EconomicParameters) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(params)?)?;
        Ok(())
    }
}

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/dropsight/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

#[cfg(test)]
mod tests {
    use super::{FileParamStore, ParamStore};
    use crate::domain::models::EconomicParameters;

    #[test]
    fn round_trips_saved_parameters() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let store = FileParamStore::at(tmp.path().join("economic_params.json"));
        let params = EconomicParameters {
            unemployment_rate: 9.1,
            inflation_rate: 3.3,
            gdp: 6.0,
        };
        store.save(&params).expect("save params");
        assert_eq!(store.load(), params);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let store = FileParamStore::at(tmp.path().join("economic_params.json"));
        assert_eq!(store.load(), EconomicParameters::default());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("economic_params.json");
        std::fs::write(&path, "{not json").expect("write corrupt state");
        let store = FileParamStore::at(path);
        assert_eq!(store.load(), EconomicParameters::default());
    }

    #[test]
    fn persisted_json_uses_wire_key_spelling() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("economic_params.json");
        let store = FileParamStore::at(path.clone());
        store
            .save(&EconomicParameters::default())
            .expect("save params");
        let raw = std::fs::read_to_string(path).expect("read state");
        let v: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert!(v.get("unemploymentRate").is_some());
        assert!(v.get("inflationRate").is_some());
        assert!(v.get("GDP").is_some());
    }
}
