// Example words split into high / mid / low frequency categories
//
// The thresholds come from the mean and population standard deviation of the
// words' combined simplified and traditional counts.

use serde::Serialize;

use hanzi_core::entry::DictionaryEntry;

use crate::frequency::WordFrequency;

/// Example words grouped by corpus frequency, each group in search order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrequencyCategories<'a> {
    pub high_frequency: Vec<&'a DictionaryEntry>,
    pub mid_frequency: Vec<&'a DictionaryEntry>,
    pub low_frequency: Vec<&'a DictionaryEntry>,
}

impl FrequencyCategories<'_> {
    pub fn is_empty(&self) -> bool {
        self.high_frequency.is_empty()
            && self.mid_frequency.is_empty()
            && self.low_frequency.is_empty()
    }

    fn truncate(&mut self, limit: usize) {
        self.high_frequency.truncate(limit);
        self.mid_frequency.truncate(limit);
        self.low_frequency.truncate(limit);
    }
}

/// Category boundaries: below `low` is low frequency, at or above `high` is
/// high frequency, anything between is mid frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Thresholds {
    /// Derive the boundaries from a sample of counts. `None` for an empty
    /// sample.
    pub fn from_counts(counts: &[u64]) -> Option<Self> {
        if counts.is_empty() {
            return None;
        }
        let n = counts.len() as f64;
        let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
        let variance = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let sd = variance.sqrt();

        let low = if mean - sd < 0.0 { mean / 3.0 } else { mean - sd };
        Some(Self {
            low,
            high: mean + sd,
        })
    }
}

/// Combined count of a word in both scripts. A word spelled the same in both
/// is counted once.
pub fn total_frequency(entry: &DictionaryEntry, words: &WordFrequency) -> u64 {
    let simplified = words.get(&entry.simplified).unwrap_or(0);
    if entry.traditional == entry.simplified {
        return simplified;
    }
    simplified + words.get(&entry.traditional).unwrap_or(0)
}

/// Sort `candidates` into frequency categories.
///
/// Every candidate contributes to the thresholds; only candidates whose
/// simplified form has a count are placed in a category, by that count.
/// `limit` caps the length of each category.
pub fn categorize<'a>(
    candidates: &[&'a DictionaryEntry],
    words: &WordFrequency,
    limit: Option<usize>,
) -> FrequencyCategories<'a> {
    let mut categories = FrequencyCategories::default();
    let totals: Vec<u64> = candidates
        .iter()
        .map(|e| total_frequency(e, words))
        .collect();
    let Some(thresholds) = Thresholds::from_counts(&totals) else {
        return categories;
    };

    for &entry in candidates {
        let Some(count) = words.get(&entry.simplified) else {
            continue;
        };
        let count = count as f64;
        if count < thresholds.low {
            categories.low_frequency.push(entry);
        } else if count < thresholds.high {
            categories.mid_frequency.push(entry);
        } else {
            categories.high_frequency.push(entry);
        }
    }

    if let Some(limit) = limit {
        categories.truncate(limit);
    }
    categories
}
