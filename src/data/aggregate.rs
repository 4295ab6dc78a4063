use super::classify::ClassifiedRecord;
use super::model::{Category, Group};

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean; `NaN` for an empty slice.
pub fn mean(vals: &[f64]) -> f64 {
    vals.iter().sum::<f64>() / vals.len() as f64
}

/// Sample standard deviation with Bessel's correction. Fewer than two values
/// give 0.
pub fn sample_std(vals: &[f64]) -> f64 {
    if vals.len() < 2 {
        return 0.0;
    }
    let m = mean(vals);
    let ss: f64 = vals.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (vals.len() - 1) as f64).sqrt()
}

// ---------------------------------------------------------------------------
// AggregateCell
// ---------------------------------------------------------------------------

/// Statistics for one (group, category) pair. Always holds at least one value;
/// a pair without data has no cell at all.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateCell {
    /// Contributing values in input order.
    vals: Vec<f64>,
    pub mean: f64,
    pub std: f64,
}

impl AggregateCell {
    pub fn from_values(vals: Vec<f64>) -> Option<Self> {
        if vals.is_empty() {
            return None;
        }
        Some(AggregateCell {
            mean: mean(&vals),
            std: sample_std(&vals),
            vals,
        })
    }

    pub fn vals(&self) -> &[f64] {
        &self.vals
    }

    pub fn n(&self) -> usize {
        self.vals.len()
    }
}

// ---------------------------------------------------------------------------
// Aggregates – the 4 × 4 grid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    cells: [[Option<AggregateCell>; 4]; 4],
}

impl Aggregates {
    pub fn get(&self, group: Group, category: Category) -> Option<&AggregateCell> {
        self.cells[group.index()][category.index()].as_ref()
    }

    /// Categories of `group` that have data, in bar order.
    pub fn present_in(&self, group: Group) -> Vec<(Category, &AggregateCell)> {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.get(group, c).map(|cell| (c, cell)))
            .collect()
    }

    /// All cells with data, group-major then category-minor.
    pub fn iter_present(&self) -> impl Iterator<Item = (Group, Category, &AggregateCell)> + '_ {
        Group::ALL.into_iter().flat_map(move |g| {
            Category::ALL
                .into_iter()
                .filter_map(move |c| self.get(g, c).map(|cell| (g, c, cell)))
        })
    }

    pub fn present_count(&self) -> usize {
        self.iter_present().count()
    }
}

/// Group present metric values by (group, category) and summarise each pair.
/// Records without a category or without a metric contribute nothing.
pub fn aggregate(records: &[ClassifiedRecord<'_>]) -> Aggregates {
    let mut buckets: [[Vec<f64>; 4]; 4] = Default::default();

    for rec in records {
        let (Some(category), Some(val)) = (rec.category, rec.record.val1) else {
            continue;
        };
        buckets[rec.group.index()][category.index()].push(val);
    }

    let mut out = Aggregates::default();
    for group in Group::ALL {
        for category in Category::ALL {
            let vals = std::mem::take(&mut buckets[group.index()][category.index()]);
            let cell = AggregateCell::from_values(vals);
            if let Some(cell) = &cell {
                log::debug!(
                    "{group}/{category}: n={} mean={:.4} sd={:.4}",
                    cell.n(),
                    cell.mean,
                    cell.std
                );
            }
            out.cells[group.index()][category.index()] = cell;
        }
    }
    out
}
