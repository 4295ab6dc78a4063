use palette::{named, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Fill, edge and overlay colours used by every panel.
#[derive(Debug, Clone, Copy)]
pub struct ChartColors {
    pub bar_fill: RGBColor,
    pub bar_edge: RGBColor,
    pub whisker: RGBColor,
    pub point: RGBColor,
    /// Opacity of the raw-value overlay.
    pub point_alpha: f64,
}

impl Default for ChartColors {
    fn default() -> Self {
        ChartColors {
            bar_fill: to_rgb(named::SKYBLUE),
            bar_edge: to_rgb(named::BLACK),
            whisker: to_rgb(named::BLACK),
            point: to_rgb(named::DARKBLUE),
            point_alpha: 0.8,
        }
    }
}

/// Convert a `palette` colour into the plotting back-end's colour type.
pub fn to_rgb(c: Srgb<u8>) -> RGBColor {
    RGBColor(c.red, c.green, c.blue)
}
