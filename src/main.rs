use anyhow::Result;

use category_wizard::config::Settings;
use category_wizard::generation::create_suggestion_backend;
use category_wizard::telemetry::init_telemetry;
use category_wizard::template::list_variables;
use category_wizard::wizard::CategoryWizard;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let mut settings = Settings::new()?;

    // Initialize tracing
    init_telemetry(&settings.log)?;
    tracing::info!("Configuration loaded");

    // An optional first argument overrides the starting category name
    if let Some(name) = std::env::args().nth(1) {
        settings.wizard.default_category = name;
    }

    if let Err(e) = run(&settings).await {
        tracing::error!(code = e.code(), error = %e, "Wizard run failed");
        return Err(e.into());
    }

    Ok(())
}

async fn run(settings: &Settings) -> category_wizard::Result<()> {
    for (group, variables) in list_variables() {
        tracing::debug!(group = %group, count = variables.len(), "Variable group");
    }

    let backend = create_suggestion_backend(&settings.wizard);
    let mut wizard = CategoryWizard::new(backend, &settings.wizard);
    tracing::info!(category = %wizard.details().name, "Wizard opened");

    wizard.enable_title_template().await?;

    let title = wizard.title();
    for (index, suggestion) in title.suggestions().iter().enumerate() {
        tracing::info!(
            index,
            template = %suggestion.template,
            origin = ?suggestion.origin,
            "Suggestion"
        );
    }

    for message in title.errors() {
        tracing::warn!(%message, "Selected template has issues");
    }
    tracing::info!(preview = %title.preview(), "Title preview");

    println!("{}", serde_json::to_string_pretty(title.suggestions())?);

    let draft = wizard.finish()?;
    println!("{}", serde_json::to_string_pretty(&draft)?);

    Ok(())
}
