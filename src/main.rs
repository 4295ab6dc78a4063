mod chart;
mod color;
mod config;
mod data;
mod pipeline;
mod summary;

use config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    let report = pipeline::run(&config)?;

    log::info!(
        "{} records read, {} classified, {} cells with data",
        report.records_read,
        report.records_classified,
        report.aggregates.present_count()
    );

    println!("\n{}", report.summary);
    Ok(())
}
