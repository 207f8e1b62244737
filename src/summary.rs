//! Per-type summary of a row set

use crate::value::Value;

/// Count and share of one runtime type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCount {
    /// Runtime type name
    pub type_name: String,
    /// Number of rows of this type
    pub count: usize,
    /// Share of the total, percent rounded to one decimal place
    pub percentage: f64,
}

/// Type breakdown of a row set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    total: usize,
    entries: Vec<TypeCount>,
}

/// Count rows per runtime type.
///
/// Entries are ordered by descending count; ties keep first-encountered
/// order. Empty input yields a zero total and no entries.
pub fn summarize<'a, I>(rows: I) -> Summary
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut total = 0usize;

    for row in rows {
        total += 1;
        let type_name = row.type_name();
        match counts.iter_mut().find(|(name, _)| name == type_name) {
            Some((_, count)) => *count += 1,
            None => counts.push((type_name.to_string(), 1)),
        }
    }

    if total == 0 {
        return Summary::default();
    }

    // stable: ties stay in first-encountered order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    #[allow(clippy::cast_precision_loss)]
    let entries = counts
        .into_iter()
        .map(|(type_name, count)| TypeCount {
            type_name,
            count,
            percentage: round_one_decimal(count as f64 / total as f64 * 100.0),
        })
        .collect();

    Summary { total, entries }
}

/// Round to one decimal place, ties to even
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

impl Summary {
    /// Total number of rows summarized
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries ordered by descending count
    #[inline]
    pub fn entries(&self) -> &[TypeCount] {
        &self.entries
    }

    /// Entry for a type name
    pub fn get(&self, type_name: &str) -> Option<&TypeCount> {
        self.entries.iter().find(|e| e.type_name == type_name)
    }

    /// Check if nothing was summarized
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
