use std::ops::Range;

use rand::Rng;

use crate::config::Config;
use crate::data::aggregate::Aggregates;
use crate::data::model::{Category, Group};

// ---------------------------------------------------------------------------
// Panel geometry (data coordinates, no drawing)
// ---------------------------------------------------------------------------

/// One bar of a panel. `x` is the slot index: present categories are packed
/// to the left, so an absent category leaves no gap.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub category: Category,
    pub x: f64,
    pub mean: f64,
    /// Whisker ends, `mean ± std`. The lower end may fall below zero.
    pub whisker: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub group: Group,
    pub bars: Vec<BarLayout>,
    /// Raw values with jittered x positions.
    pub points: Vec<(f64, f64)>,
}

impl PanelLayout {
    /// Horizontal extent with a small margin either side of the outer bars.
    pub fn x_range(&self) -> Range<f64> {
        -0.6..(self.bars.len() as f64 - 0.4)
    }

    /// Tick label for an axis position; only whole slot positions are named.
    pub fn label_at(&self, x: f64) -> Option<&'static str> {
        let slot = x.round();
        if (x - slot).abs() > 1e-6 || slot < 0.0 {
            return None;
        }
        self.bars.get(slot as usize).map(|b| b.category.label())
    }
}

/// Geometry for one group's panel, or `None` when the group has no data and
/// the panel is hidden.
pub fn layout_panel<R: Rng>(
    group: Group,
    aggregates: &Aggregates,
    config: &Config,
    rng: &mut R,
) -> Option<PanelLayout> {
    let present = aggregates.present_in(group);
    if present.is_empty() {
        return None;
    }

    let mut bars = Vec::with_capacity(present.len());
    let mut points = Vec::new();

    for (slot, (category, cell)) in present.into_iter().enumerate() {
        let x = slot as f64;
        bars.push(BarLayout {
            category,
            x,
            mean: cell.mean,
            whisker: (cell.mean - cell.std, cell.mean + cell.std),
        });
        points.extend(cell.vals().iter().map(|&v| (x + jitter(config.jitter, rng), v)));
    }

    Some(PanelLayout {
        group,
        bars,
        points,
    })
}

/// Layouts for the four panels in figure order.
pub fn layout_figure<R: Rng>(
    aggregates: &Aggregates,
    config: &Config,
    rng: &mut R,
) -> Vec<(Group, Option<PanelLayout>)> {
    Group::ALL
        .into_iter()
        .map(|g| (g, layout_panel(g, aggregates, config, rng)))
        .collect()
}

fn jitter<R: Rng>(half_width: f64, rng: &mut R) -> f64 {
    if half_width <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-half_width..half_width)
}
