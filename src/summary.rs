use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::data::aggregate::Aggregates;

// ---------------------------------------------------------------------------
// Summary listing
// ---------------------------------------------------------------------------

pub const SUMMARY_TITLE: &str = "Summary (per group & category):";

/// One line of the summary, already formatted for display.
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Group")]
    pub group: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "N")]
    pub n: usize,
    #[tabled(rename = "Mean")]
    pub mean: String,
    #[tabled(rename = "SD")]
    pub sd: String,
}

/// Rows for every present cell, group-major then category-minor.
pub fn summary_rows(aggregates: &Aggregates) -> Vec<SummaryRow> {
    aggregates
        .iter_present()
        .map(|(group, category, cell)| SummaryRow {
            group: group.to_string(),
            category: category.to_string(),
            n: cell.n(),
            mean: format!("{:.6}", cell.mean),
            sd: format!("{:.6}", cell.std),
        })
        .collect()
}

/// The full printable listing: title line followed by the table.
pub fn render_summary(aggregates: &Aggregates) -> String {
    let rows = summary_rows(aggregates);
    let mut table = Table::new(rows);
    table.with(Style::blank());
    format!("{SUMMARY_TITLE}\n{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::aggregate;
    use crate::data::classify::classify;
    use crate::data::loader::load_reader;

    fn aggregates_of(csv: &str) -> Aggregates {
        let ds = load_reader(csv.as_bytes()).unwrap();
        aggregate(&classify(&ds))
    }

    #[test]
    fn rows_skip_absent_cells_and_groups() {
        let aggs = aggregates_of(
            "a,WMH,MRI,GAN,2D,0.25,,,\n\
             b,Stroke,MRI,AE,2D,0.5,,,\n\
             c,Stroke,MRI,AE,2D,0.7,,,\n\
             d,BraTS,MRI,VAE,2D,--,,,\n",
        );
        let rows = summary_rows(&aggs);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].group, "Stroke");
        assert_eq!(rows[0].category, "AE");
        assert_eq!(rows[0].n, 2);
        assert_eq!(rows[0].mean, "0.600000");
        assert_eq!(rows[0].sd, "0.141421");
        assert_eq!(rows[1].group, "WMH");
        assert_eq!(rows[1].sd, "0.000000");
        assert!(rows.iter().all(|r| r.group != "Tumour"));
    }

    #[test]
    fn rendered_listing_has_title_and_header() {
        let aggs = aggregates_of("a,MS,MRI,Diffusion,2D,0.9,,,\n");
        let text = render_summary(&aggs);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(SUMMARY_TITLE));
        let header = lines.next().unwrap();
        for col in ["Group", "Category", "N", "Mean", "SD"] {
            assert!(header.contains(col), "{header:?}");
        }
        let row = lines.next().unwrap();
        assert!(row.contains("MS") && row.contains("Diffusion") && row.contains("0.900000"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let csv = "a,ISLES,MRI,VAE,2D,0.3,,,\nb,ISLES,MRI,VAE,2D,0.4,,,\n";
        assert_eq!(
            render_summary(&aggregates_of(csv)),
            render_summary(&aggregates_of(csv))
        );
    }
}
