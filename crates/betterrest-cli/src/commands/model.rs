use betterrest_core::Config;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ModelAction {
    /// Print the active coefficient table as JSON
    Show,
    /// Check that the configured model loads
    Check,
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let estimator = config.estimator()?;

    match action {
        ModelAction::Show => {
            println!("{}", serde_json::to_string_pretty(estimator.model())?);
        }
        ModelAction::Check => {
            let source = config
                .model_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "bundled".to_string());
            println!("ok: {} ({source})", estimator.model().model.name);
        }
    }
    Ok(())
}
