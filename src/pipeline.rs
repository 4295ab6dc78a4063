use anyhow::{Context, Result};

use crate::chart::figure::render_figure;
use crate::chart::layout::layout_figure;
use crate::config::Config;
use crate::data::aggregate::{aggregate, Aggregates};
use crate::data::classify::classify;
use crate::data::loader::load_file;
use crate::summary::render_summary;

// ---------------------------------------------------------------------------
// Batch run: load → classify → aggregate → render
// ---------------------------------------------------------------------------

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct Report {
    pub aggregates: Aggregates,
    /// Printable summary listing.
    pub summary: String,
    pub records_read: usize,
    pub records_classified: usize,
}

/// Run the whole pipeline once. The only hard failures are an unreadable input
/// table and an unwritable figure.
pub fn run(config: &Config) -> Result<Report> {
    let dataset = load_file(&config.input)?;
    let classified = classify(&dataset);
    let aggregates = aggregate(&classified);

    let panels = layout_figure(&aggregates, config, &mut rand::thread_rng());
    render_figure(&panels, config)
        .with_context(|| format!("rendering {}", config.output.display()))?;

    Ok(Report {
        summary: render_summary(&aggregates),
        records_read: dataset.len(),
        records_classified: classified.len(),
        aggregates,
    })
}
