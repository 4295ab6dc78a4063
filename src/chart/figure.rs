//! PNG output of the 2×2 comparison grid.
//!
//! Drawing is a straight walk over [`PanelLayout`]s; all data decisions
//! (which bars exist, where points land) were made by the layout step.

use std::fs;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use super::layout::PanelLayout;
use crate::config::Config;
use crate::data::model::Group;

/// Errors that can occur while drawing the figure
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save figure: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, RenderError>;

/// Draw every visible panel into one PNG at `config.output`.
///
/// `panels` is in figure order; panel `i` goes to grid cell `i` (row-major).
/// A `None` panel leaves its cell blank: no frame, no axes.
pub fn render_figure(panels: &[(Group, Option<PanelLayout>)], config: &Config) -> Result<()> {
    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(&config.output, config.pixel_size()).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

    let cells = root.split_evenly((2, 2));
    for ((group, panel), cell) in panels.iter().zip(cells.iter()) {
        match panel {
            Some(panel) => draw_panel(cell, panel, config)?,
            None => log::debug!("{group}: no data, panel hidden"),
        }
    }

    root.present()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    log::info!("Wrote figure to {}", config.output.display());
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelLayout,
    config: &Config,
) -> Result<()> {
    let font = config.points(10.0);
    let colors = &config.colors;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.group.label(), ("sans-serif", config.points(12.0)))
        .margin(config.points(6.0))
        .x_label_area_size(config.points(20.0))
        .y_label_area_size(config.points(40.0))
        .build_cartesian_2d(panel.x_range(), config.y_range.clone())
        .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

    // Ticks at every half slot so each bar centre gets one; only whole slots
    // are labelled.
    let label = |x: &f64| panel.label_at(*x).unwrap_or("").to_string();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(2 * panel.bars.len() + 1)
        .x_label_formatter(&label)
        .y_desc(config.y_desc.as_str())
        .label_style(("sans-serif", font))
        .axis_desc_style(("sans-serif", font))
        .draw()
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    // Out-of-range geometry is clipped to the visible band here, at draw time.
    let (y_min, y_max) = (config.y_range.start, config.y_range.end);
    let clip = |v: f64| v.clamp(y_min, y_max);
    let visible = |v: f64| (y_min..=y_max).contains(&v);
    let hw = config.bar_half_width;
    let cap = config.cap_half_width;
    let edge = colors.bar_edge.stroke_width(config.points(0.8).max(1));
    let whisker = colors.whisker.stroke_width(config.points(1.0).max(1));

    chart
        .draw_series(panel.bars.iter().map(|b| {
            Rectangle::new(
                [(b.x - hw, clip(0.0)), (b.x + hw, clip(b.mean))],
                colors.bar_fill.filled(),
            )
        }))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;
    chart
        .draw_series(panel.bars.iter().map(|b| {
            Rectangle::new([(b.x - hw, clip(0.0)), (b.x + hw, clip(b.mean))], edge)
        }))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    let mut whisker_paths = Vec::new();
    for b in &panel.bars {
        let (lo, hi) = b.whisker;
        if hi < y_min || lo > y_max {
            continue;
        }
        whisker_paths.push(vec![(b.x, clip(lo)), (b.x, clip(hi))]);
        for end in [lo, hi] {
            if visible(end) {
                whisker_paths.push(vec![(b.x - cap, end), (b.x + cap, end)]);
            }
        }
    }
    chart
        .draw_series(
            whisker_paths
                .into_iter()
                .map(|path| PathElement::new(path, whisker)),
        )
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    let point_style = colors.point.mix(colors.point_alpha).filled();
    chart
        .draw_series(
            panel
                .points
                .iter()
                .filter(|(_, y)| visible(*y))
                .map(|&(x, y)| Circle::new((x, y), config.point_radius, point_style)),
        )
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::layout_figure;
    use crate::data::aggregate::{aggregate, Aggregates};
    use crate::data::classify::classify;
    use crate::data::loader::load_reader;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn figure_without_data_is_blank() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output: dir.path().join("out").join("blank.png"),
            ..Config::default()
        };
        let panels = layout_figure(&Aggregates::default(), &config, &mut StdRng::seed_from_u64(0));
        render_figure(&panels, &config).unwrap();
        assert!(config.output.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn figure_with_all_panels() {
        let csv = "\
a,Stroke,MRI,VAE,2D,0.5,,,
b,Stroke,MRI,VAE,2D,0.9,,,
c,BraTS,MRI,GAN,2D,1.3,,,
d,MS,MRI,AE,2D,0.1,,,
e,MS,MRI,AE,2D,0.9,,,
f,WMH,MRI,Diffusion,2D,0.6,,,
";
        let ds = load_reader(csv.as_bytes()).unwrap();
        let aggs = aggregate(&classify(&ds));
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output: dir.path().join("grid.png"),
            ..Config::default()
        };
        let panels = layout_figure(&aggs, &config, &mut rand::thread_rng());
        render_figure(&panels, &config).unwrap();
        assert!(config.output.exists());
    }
}
