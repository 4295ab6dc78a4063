use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Fixed column order of the input table.
pub const SCHEMA: [&str; 9] = [
    "author", "disease", "modality", "method", "dim", "val1", "val2", "val3", "notes",
];

/// One input row after padding/truncation to [`SCHEMA`], before any coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    pub author: String,
    pub disease: String,
    pub modality: String,
    pub method: String,
    pub dim: String,
    pub val1: String,
    pub val2: String,
    pub val3: String,
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single reported result.
///
/// `val1` is the primary metric. `None` means the cell was `--`, empty or not
/// a number; it never stands in for zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub author: String,
    /// Free-text disease label; `None` when the cell was blank.
    pub disease: Option<String>,
    pub modality: String,
    pub method: String,
    pub dim: String,
    pub val1: Option<f64>,
    pub val2: String,
    pub val3: String,
    pub notes: String,
}

impl Record {
    pub fn from_raw(raw: RawRow) -> Self {
        let disease = if raw.disease.trim().is_empty() {
            None
        } else {
            Some(raw.disease)
        };
        Record {
            val1: super::loader::coerce_metric(&raw.val1),
            author: raw.author,
            disease,
            modality: raw.modality,
            method: raw.method,
            dim: raw.dim,
            val2: raw.val2,
            val3: raw.val3,
            notes: raw.notes,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Whether the first line of the source was consumed as a header.
    pub had_header: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Group / Category – closed enumerations
// ---------------------------------------------------------------------------

/// Clinical group derived from the disease label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Stroke,
    Tumour,
    Ms,
    Wmh,
}

impl Group {
    /// Panel order of the figure.
    pub const ALL: [Group; 4] = [Group::Stroke, Group::Tumour, Group::Ms, Group::Wmh];

    pub fn label(self) -> &'static str {
        match self {
            Group::Stroke => "Stroke",
            Group::Tumour => "Tumour",
            Group::Ms => "MS",
            Group::Wmh => "WMH",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Model family of the reported method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Diffusion,
    Ae,
    Vae,
    Gan,
}

impl Category {
    /// Bar order within a panel.
    pub const ALL: [Category; 4] = [
        Category::Diffusion,
        Category::Ae,
        Category::Vae,
        Category::Gan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Diffusion => "Diffusion",
            Category::Ae => "AE",
            Category::Vae => "VAE",
            Category::Gan => "GAN",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact match on the trimmed, case-folded method name. No substring
    /// matching: `"Cond. VAE"` is not a VAE.
    pub fn from_method(method: &str) -> Option<Category> {
        let method = method.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(method))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_matching_is_exact_modulo_case_and_whitespace() {
        assert_eq!(Category::from_method("  diffusion "), Some(Category::Diffusion));
        assert_eq!(Category::from_method("vae"), Some(Category::Vae));
        assert_eq!(Category::from_method("Gan"), Some(Category::Gan));
        assert_eq!(Category::from_method("AE"), Some(Category::Ae));
        assert_eq!(Category::from_method("cVAE"), None);
        assert_eq!(Category::from_method("AE-GAN"), None);
        assert_eq!(Category::from_method(""), None);
    }

    #[test]
    fn blank_disease_becomes_none() {
        let raw = RawRow {
            disease: "   ".into(),
            val1: "0.5".into(),
            ..Default::default()
        };
        let rec = Record::from_raw(raw);
        assert_eq!(rec.disease, None);
        assert_eq!(rec.val1, Some(0.5));
    }

    #[test]
    fn enum_indices_follow_display_order() {
        for (i, g) in Group::ALL.iter().enumerate() {
            assert_eq!(g.index(), i);
        }
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert_eq!(Group::Ms.to_string(), "MS");
    }
}
