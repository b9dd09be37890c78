use crate::cli::ParamField;
use crate::domain::models::FormState;
use crate::services::store::ParamStore;

/// Saturation bounds for the clamped parameters. GDP intentionally carries
/// no runtime clamp; the entry form is its only guard.
const UNEMPLOYMENT_RANGE: (f64, f64) = (0.0, 15.0);
const INFLATION_RANGE: (f64, f64) = (0.0, 10.0);

pub fn initialize(store: &dyn ParamStore) -> FormState {
    FormState {
        roll_number: String::new(),
        params: store.load(),
        editable: false,
    }
}

/// Updates one economic parameter. Out-of-range input is silently corrected
/// by min/max saturation, not rejected. The store is written only when the
/// value actually changed; roll-number edits never reach the store.
pub fn set_param(
    state: &mut FormState,
    store: &dyn ParamStore,
    field: ParamField,
    value: f64,
) -> anyhow::Result<()> {
    let slot = match field {
        ParamField::UnemploymentRate => &mut state.params.unemployment_rate,
        ParamField::InflationRate => &mut state.params.inflation_rate,
        ParamField::Gdp => &mut state.params.gdp,
    };
    let next = match field {
        ParamField::UnemploymentRate => value.clamp(UNEMPLOYMENT_RANGE.0, UNEMPLOYMENT_RANGE.1),
        ParamField::InflationRate => value.clamp(INFLATION_RANGE.0, INFLATION_RANGE.1),
        ParamField::Gdp => value,
    };
    if *slot == next {
        return Ok(());
    }
    *slot = next;
    store.save(&state.params)?;
    Ok(())
}

pub fn set_roll_number(state: &mut FormState, raw: &str) {
    state.roll_number = raw.to_string();
}

/// Pure UI toggle: flipping it twice restores the original value and never
/// touches the stored parameters.
pub fn toggle_editable(state: &mut FormState) -> bool {
    state.editable = !state.editable;
    state.editable
}
