// Not every test binary exercises every helper.
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dropsight").expect("dropsight binary");
        cmd.env("HOME", &self.home)
            .env_remove("DROPSIGHT_API_BASE");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_api(&self, base: &str, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .arg("--api-base")
            .arg(base)
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".config/dropsight")
    }

    pub fn write_config(&self, contents: &str) {
        fs::create_dir_all(self.config_dir()).expect("create config dir");
        fs::write(self.config_dir().join("config.toml"), contents).expect("write config");
    }
}

#[derive(Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn get(path: &str, status: u16, body: Value) -> Self {
        Self {
            method: "GET",
            path: path.to_string(),
            status,
            body: body.to_string(),
        }
    }

    pub fn post(path: &str, status: u16, body: Value) -> Self {
        Self {
            method: "POST",
            path: path.to_string(),
            status,
            body: body.to_string(),
        }
    }
}

/// Minimal single-threaded HTTP responder backing the e2e tests. Serves the
/// configured routes until the test process exits.
pub struct FixtureServer {
    pub base_url: String,
}

impl FixtureServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server addr");
        thread::spawn(move || {
            for stream in listener.incoming() {
                if let Ok(mut stream) = stream {
                    let _ = serve_one(&mut stream, &routes);
                }
            }
        });
        Self {
            base_url: format!("http://{}", addr),
        }
    }
}

fn serve_one(stream: &mut TcpStream, routes: &[Route]) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header)?;
        let header = header.trim();
        if header.is_empty() {
            break;
        }
        let lower = header.to_ascii_lowercase();
        if let Some(rest) = lower.strip_prefix("content-length:") {
            content_length = rest.trim().parse().unwrap_or(0);
        }
    }
    if content_length > 0 {
        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body)?;
    }

    let matched = routes
        .iter()
        .find(|r| r.method == method && r.path == path);
    let (status, body) = match matched {
        Some(r) => (r.status, r.body.clone()),
        None => (404, json!({"error": "not found"}).to_string()),
    };
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}

/// Record fixture with whitelisted keys deliberately out of display order,
/// plus attributes that must stay hidden.
pub fn student_fixture() -> Value {
    json!({
        "Roll_No": 1001,
        "Course": "CS",
        "Age at enrollment": 20,
        "Marital Status": 1,
        "Application Mode": 17,
        "Daytime/evening attendance": 1,
        "Previous qualification": 1,
        "Previous qualification (grade)": 122.0,
        "Educational special needs": 0,
        "Admission grade": 142.5,
        "International": 0,
        "Curricular units 1st sem (enrolled)": 6,
        "Curricular units 2nd sem (enrolled)": 6,
        "Curricular units 1st sem (grade)": 13.6,
        "Curricular units 2nd sem (grade)": 12.9,
        "Debtor": 0,
        "Gender": 1,
        "Tuition fees up to date": 1
    })
}

pub fn dropout_prediction() -> Value {
    json!({
        "prediction": 1,
        "confidence": 85.4,
        "overall_accuracy": 87.0,
        "justification": [
            "Curricular units 2nd sem (grade) strongly increased the likelihood of dropout.",
            "Admission grade slightly decreased the likelihood of dropout."
        ],
        "fairness_metrics": [
            {
                "group": "Gender",
                "difference_in_dropout_rate": 0.02,
                "interpretation": "The model now treats both genders more equally."
            },
            {
                "group": "Age Group",
                "difference_in_dropout_rate": "~0.05",
                "interpretation": "Older students still have a slight advantage."
            }
        ]
    })
}

pub fn happy_routes() -> Vec<Route> {
    vec![
        Route::get("/get_student/A1001", 200, student_fixture()),
        Route::post("/predict", 200, dropout_prediction()),
    ]
}
