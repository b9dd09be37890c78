use crate::domain::models::JsonOut;
use serde::Serialize;

/// Prints either the machine-readable `{ok, data}` envelope or the
/// human-readable lines produced by `text`. Views here are multi-line blocks
/// rather than one row per item, so the renderer returns the whole block.
pub fn emit<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in text(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}
