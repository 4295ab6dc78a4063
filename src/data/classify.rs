use super::model::{Category, Dataset, Group, Record};

// ---------------------------------------------------------------------------
// Disease → group rules
// ---------------------------------------------------------------------------

/// One entry of the ordered rule table; the predicate sees trimmed,
/// lower-cased text.
struct Rule {
    group: Group,
    matches: fn(&str) -> bool,
}

fn is_stroke(s: &str) -> bool {
    s.contains("stroke") || s.contains("isles")
}

fn is_tumour(s: &str) -> bool {
    s.contains("tumour") || s.contains("tumor") || s.contains("brats")
}

fn is_ms(s: &str) -> bool {
    s.starts_with("ms") || s.contains(" ms") || s.contains("multiple")
}

fn is_wmh(s: &str) -> bool {
    s.contains("wmh")
}

/// Evaluated top to bottom, first match wins.
const RULES: [Rule; 4] = [
    Rule { group: Group::Stroke, matches: is_stroke },
    Rule { group: Group::Tumour, matches: is_tumour },
    Rule { group: Group::Ms, matches: is_ms },
    Rule { group: Group::Wmh, matches: is_wmh },
];

/// Map a free-text disease label to its group. `None` (blank input or no
/// matching rule) means the record takes no part in aggregation.
pub fn classify_disease(disease: Option<&str>) -> Option<Group> {
    let text = disease?.trim().to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&text))
        .map(|rule| rule.group)
}

// ---------------------------------------------------------------------------
// Dataset classification
// ---------------------------------------------------------------------------

/// A record that passed the group rules.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedRecord<'a> {
    pub record: &'a Record,
    pub group: Group,
    /// `None` when the method is not one of the four families.
    pub category: Option<Category>,
}

/// Attach group and category to every record, dropping unclassified ones.
pub fn classify(dataset: &Dataset) -> Vec<ClassifiedRecord<'_>> {
    let classified: Vec<ClassifiedRecord<'_>> = dataset
        .records
        .iter()
        .filter_map(|record| {
            let group = classify_disease(record.disease.as_deref())?;
            Some(ClassifiedRecord {
                record,
                group,
                category: Category::from_method(&record.method),
            })
        })
        .collect();

    log::info!(
        "{} of {} records classified ({} dropped as unclassified)",
        classified.len(),
        dataset.len(),
        dataset.len() - classified.len()
    );
    classified
}
