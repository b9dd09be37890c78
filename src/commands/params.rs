use crate::*;

pub fn handle_params_commands(cli: &Cli, command: &ParamsCommands) -> anyhow::Result<()> {
    let store = FileParamStore::default_location()?;
    let mut state = form::initialize(&store);

    match command {
        ParamsCommands::Show => {
            emit(cli.json, state.params, |p| params_lines(p))?;
        }
        ParamsCommands::Set { field, value } => {
            form::set_param(&mut state, &store, *field, *value)?;
            audit(
                "params_set",
                serde_json::json!({"field": field, "value": value}),
            );
            emit(cli.json, state.params, |p| params_lines(p))?;
        }
        ParamsCommands::Reset => {
            let defaults = EconomicParameters::default();
            if state.params != defaults {
                store.save(&defaults)?;
            }
            state.params = defaults;
            audit("params_reset", serde_json::json!({}));
            emit(cli.json, state.params, |p| params_lines(p))?;
        }
    }

    Ok(())
}

pub fn params_lines(p: &EconomicParameters) -> Vec<String> {
    vec![
        format!("Unemployment Rate (%): {}", p.unemployment_rate),
        format!("Inflation Rate (%): {}", p.inflation_rate),
        format!("GDP (trillion): {}", p.gdp),
    ]
}
