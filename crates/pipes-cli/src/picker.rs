use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;

use pipes_core::environment::Environment;
use pipes_core::marker;

/// Let the user choose one environment. `None` if the prompt was cancelled.
pub fn pick<'a>(environments: &[&'a Environment]) -> color_eyre::Result<Option<&'a Environment>> {
    let width = environments
        .iter()
        .map(|e| e.project_name.len())
        .max()
        .unwrap_or(0);

    let items: Vec<String> = environments
        .iter()
        .map(|e| {
            let linked = marker::read(&e.envpath).unwrap_or_else(|| "-".to_string());
            format!("{:<width$}  {linked}", e.project_name)
        })
        .collect();

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select an environment")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.and_then(|i| environments.get(i).copied()))
}
