use std::ops::Range;
use std::path::PathBuf;

use crate::color::ChartColors;

// ---------------------------------------------------------------------------
// Compiled-in run configuration
// ---------------------------------------------------------------------------

/// Everything the pipeline needs to know. The binary only ever uses
/// [`Config::default`]; tests build their own.
#[derive(Debug, Clone)]
pub struct Config {
    /// Results table to read.
    pub input: PathBuf,
    /// PNG written by the renderer.
    pub output: PathBuf,
    /// Figure size in inches (width, height).
    pub figure_inches: (f64, f64),
    pub dpi: u32,
    /// Visible metric range on every panel.
    pub y_range: Range<f64>,
    pub y_desc: String,
    /// Half the bar width, in category slots.
    pub bar_half_width: f64,
    /// Maximum horizontal offset of an overlay point, in category slots.
    pub jitter: f64,
    /// Half the width of a whisker cap, in category slots.
    pub cap_half_width: f64,
    /// Overlay point radius in pixels.
    pub point_radius: u32,
    pub colors: ChartColors,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("Table2.csv"),
            output: PathBuf::from("figure_grid.png"),
            figure_inches: (8.0, 8.0),
            dpi: 200,
            y_range: 0.0..1.05,
            y_desc: "Primary metric (val1)".to_string(),
            bar_half_width: 0.4,
            jitter: 0.1,
            cap_half_width: 0.1,
            point_radius: 8,
            colors: ChartColors::default(),
        }
    }
}

impl Config {
    /// Raster size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w, h) = self.figure_inches;
        let dpi = f64::from(self.dpi);
        ((w * dpi).round() as u32, (h * dpi).round() as u32)
    }

    /// Scale a size given in points (1/72 inch) to pixels at the configured DPI.
    pub fn points(&self, pt: f64) -> u32 {
        (pt * f64::from(self.dpi) / 72.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_raster_is_1600_square() {
        let cfg = Config::default();
        assert_eq!(cfg.pixel_size(), (1600, 1600));
        assert_eq!(cfg.y_range, 0.0..1.05);
    }

    #[test]
    fn points_scale_with_dpi() {
        let cfg = Config {
            dpi: 144,
            ..Config::default()
        };
        assert_eq!(cfg.points(10.0), 20);
    }
}
