mod bootstrap;
mod report;

use anyhow::{Context, Result};
use logstats_core::settings::Settings;
use logstats_data::analysis::analyze_source;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("logstats v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, format: {}",
        settings.input.display(),
        settings.format
    );

    // An unreadable source aborts the run; an empty one still reports "no data".
    let result = analyze_source(&settings.input)
        .with_context(|| format!("cannot analyse {}", settings.input.display()))?;

    let output = if settings.wants_json() {
        report::render_json(&result)?
    } else {
        report::render_text(&result, settings.top)
    };
    println!("{}", output);

    Ok(())
}
