use crate::commands::params;
use crate::*;
use std::io::{BufRead, Write};

pub fn handle_workflow_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Fetch { roll_number } => {
            let client = api_client(cli)?;
            let mut wf = Workflow::new(&client);
            wf.submit_roll(roll_number);
            if let Some(msg) = wf.error.take() {
                audit(
                    "fetch",
                    serde_json::json!({"roll_number": roll_number, "ok": false}),
                );
                anyhow::bail!(msg);
            }
            let Some(record) = wf.record.as_ref() else {
                anyhow::bail!("Failed to fetch student");
            };
            let details = StudentDetails {
                roll_number: roll_number.clone(),
                fields: visible_fields(record),
            };
            audit("fetch", serde_json::json!({"roll_number": roll_number}));
            emit(cli.json, details, details_lines)?;
        }
        Commands::Predict { roll_number } => {
            let client = api_client(cli)?;
            let mut wf = Workflow::new(&client);
            wf.submit_roll(roll_number);
            if let Some(msg) = wf.error.take() {
                anyhow::bail!(msg);
            }
            let Some(record) = wf.record.as_ref() else {
                anyhow::bail!("Failed to fetch student");
            };
            let details = StudentDetails {
                roll_number: roll_number.clone(),
                fields: visible_fields(record),
            };
            wf.request_prediction();
            if let Some(msg) = wf.error.take() {
                audit(
                    "predict",
                    serde_json::json!({"roll_number": roll_number, "ok": false}),
                );
                anyhow::bail!(msg);
            }
            let Some(prediction) = wf.prediction.clone() else {
                anyhow::bail!("Prediction failed");
            };
            audit(
                "predict",
                serde_json::json!({"roll_number": roll_number, "outcome": prediction.outcome}),
            );
            let report = PredictReport {
                details,
                prediction,
            };
            emit(cli.json, report, |r| {
                let mut lines = details_lines(&r.details);
                lines.push(String::new());
                lines.extend(prediction_lines(&r.prediction));
                lines
            })?;
        }
        Commands::Run => {
            let store = FileParamStore::default_location()?;
            let client = api_client(cli)?;
            let stdin = std::io::stdin();
            run_loop(&client, &store, &mut stdin.lock())?;
        }
        Commands::Params { .. } => unreachable!("handled before workflow dispatch"),
    }

    Ok(())
}

fn api_client(cli: &Cli) -> anyhow::Result<ApiClient> {
    let config = load_config()?;
    let base = resolve_api_base(
        cli.api_base.as_deref(),
        std::env::var(API_BASE_ENV).ok(),
        &config,
    )?;
    ApiClient::new(base, config.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
}

pub fn details_lines(details: &StudentDetails) -> Vec<String> {
    let mut lines = vec![format!("Student Details (Roll No. {})", details.roll_number)];
    for row in &details.fields {
        lines.push(format!("  {}: {}", row.label, plain_value(&row.value)));
    }
    lines
}

pub fn prediction_lines(result: &PredictionResult) -> Vec<String> {
    let mut lines = vec![
        "Prediction Result".to_string(),
        format!("Outcome: {}", result.outcome.headline()),
        format!("Confidence: {}%", result.confidence),
    ];
    if let Some(accuracy) = result.overall_accuracy {
        lines.push(format!("Overall Accuracy: {}", accuracy));
    }
    if !result.justification.is_empty() {
        lines.push(String::new());
        lines.push("Why the model predicted this:".to_string());
        for (i, reason) in result.justification.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, reason));
        }
    }
    if !result.fairness_metrics.is_empty() {
        lines.push(String::new());
        lines.push("Fairness Metrics after Bias Mitigation".to_string());
        for metric in &result.fairness_metrics {
            lines.push(format!(
                "  {}: {}",
                metric.group, metric.difference_in_dropout_rate
            ));
            lines.push(format!("    {}", metric.interpretation));
        }
    }
    lines
}

/// Strings print without JSON quotes; everything else keeps its JSON form.
fn plain_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn prompt(text: &str, input: &mut impl BufRead) -> Option<String> {
    print!("{}", text);
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Interactive entry → details → result loop. Reads line-oriented input so
/// it can be driven from a pipe in tests.
pub fn run_loop(
    service: &dyn StudentService,
    store: &dyn ParamStore,
    input: &mut impl BufRead,
) -> anyhow::Result<()> {
    let mut state = form::initialize(store);
    let mut wf = Workflow::new(service);

    println!("Student Outcome Predictor");
    loop {
        println!();
        println!("Default Parameters:");
        for line in params::params_lines(&state.params) {
            println!("  {}", line);
        }
        let Some(choice) = prompt(
            "Roll number (e = edit parameters, q = quit): ",
            input,
        ) else {
            return Ok(());
        };
        match choice.as_str() {
            "q" => return Ok(()),
            "e" => {
                if form::toggle_editable(&mut state) {
                    edit_params(&mut state, store, input)?;
                } else {
                    println!("Parameters locked.");
                }
            }
            "" => println!("Roll number is required."),
            roll => {
                form::set_roll_number(&mut state, roll);
                println!("Fetching student data...");
                wf.submit_roll(&state.roll_number);
                if let Some(msg) = wf.error.take() {
                    audit("fetch", serde_json::json!({"roll_number": roll, "ok": false}));
                    println!("Error: {}", msg);
                    continue;
                }
                let Some(record) = wf.record.as_ref() else {
                    println!("No student data found.");
                    continue;
                };
                audit("fetch", serde_json::json!({"roll_number": roll}));
                let details = StudentDetails {
                    roll_number: state.roll_number.clone(),
                    fields: visible_fields(record),
                };
                for line in details_lines(&details) {
                    println!("{}", line);
                }
                if !details_prompt(&mut wf, &state, input)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Details phase. Returns false when the user quits outright.
fn details_prompt(
    wf: &mut Workflow<'_>,
    state: &FormState,
    input: &mut impl BufRead,
) -> anyhow::Result<bool> {
    loop {
        let Some(choice) = prompt("Predict outcome? (y = predict, b = back, q = quit): ", input)
        else {
            return Ok(false);
        };
        match choice.as_str() {
            "q" => return Ok(false),
            "b" => {
                wf.reset();
                return Ok(true);
            }
            "y" => {
                println!("Predicting...");
                wf.request_prediction();
                if let Some(msg) = wf.error.take() {
                    audit(
                        "predict",
                        serde_json::json!({"roll_number": state.roll_number, "ok": false}),
                    );
                    println!("Error: {}", msg);
                    continue;
                }
                let Some(result) = wf.prediction.clone() else {
                    println!("Error: Prediction failed");
                    continue;
                };
                audit(
                    "predict",
                    serde_json::json!({"roll_number": state.roll_number, "outcome": result.outcome}),
                );
                println!();
                for line in prediction_lines(&result) {
                    println!("{}", line);
                }
                let Some(again) = prompt("Predict for another student? (y/n): ", input) else {
                    return Ok(false);
                };
                wf.reset();
                return Ok(again == "y");
            }
            _ => println!("Unrecognized choice."),
        }
    }
}

fn edit_params(
    state: &mut FormState,
    store: &dyn ParamStore,
    input: &mut impl BufRead,
) -> anyhow::Result<()> {
    let fields = [
        (ParamField::UnemploymentRate, "Unemployment Rate (%)"),
        (ParamField::InflationRate, "Inflation Rate (%)"),
        (ParamField::Gdp, "GDP (trillion)"),
    ];
    for (field, label) in fields {
        let current = match field {
            ParamField::UnemploymentRate => state.params.unemployment_rate,
            ParamField::InflationRate => state.params.inflation_rate,
            ParamField::Gdp => state.params.gdp,
        };
        let Some(raw) = prompt(&format!("{} [{}]: ", label, current), input) else {
            return Ok(());
        };
        if raw.is_empty() {
            continue;
        }
        match raw.parse::<f64>() {
            Ok(value) => form::set_param(state, store, field, value)?,
            Err(_) => println!("Not a number, keeping {}", current),
        }
    }
    audit("params_edit", serde_json::json!({"params": state.params}));
    Ok(())
}
