//! Term aggregation: clustering tokens that share a stem.

use std::collections::HashMap;

use serde::Serialize;

/// One stem cluster within a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermEntry {
    pub stem: String,
    /// Shortest surface form seen for this stem; the earliest wins ties.
    pub representative: String,
    pub count: u32,
}

/// Stem clusters of a token sequence, in order of each stem's first
/// occurrence. Never reordered after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    entries: Vec<TermEntry>,
}

impl Aggregation {
    /// Aggregate `(token, stem)` pairs.
    ///
    /// Runs in two passes: a merge plan assigning every position to the
    /// group of its stem's first occurrence, then materialization of the
    /// groups. Input is never mutated while scanned.
    pub fn build<T, S>(pairs: impl IntoIterator<Item = (T, S)>) -> Self
    where
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let pairs: Vec<(T, S)> = pairs.into_iter().collect();
        let (groups, firsts) = merge_plan(pairs.iter().map(|(_, s)| s.as_ref()));

        let mut entries: Vec<TermEntry> = firsts
            .iter()
            .map(|&pos| {
                let (token, stem) = &pairs[pos];
                TermEntry {
                    stem: stem.as_ref().to_string(),
                    representative: token.as_ref().to_string(),
                    count: 0,
                }
            })
            .collect();

        for ((token, _), &group) in pairs.iter().zip(&groups) {
            let entry = &mut entries[group];
            entry.count += 1;
            let token = token.as_ref();
            if token.chars().count() < entry.representative.chars().count() {
                entry.representative = token.to_string();
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the aggregated sequence's length.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.count)).sum()
    }

    pub fn get(&self, stem: &str) -> Option<&TermEntry> {
        self.entries.iter().find(|e| e.stem == stem)
    }

    /// Up to `n` most frequent entries; equal counts keep aggregation order.
    pub fn top_terms(&self, n: usize) -> Vec<&TermEntry> {
        let mut ranked: Vec<&TermEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

/// Group index for every position, and the first position of each group.
fn merge_plan<'a>(stems: impl Iterator<Item = &'a str>) -> (Vec<usize>, Vec<usize>) {
    let mut group_of: HashMap<&str, usize> = HashMap::new();
    let mut groups = Vec::new();
    let mut firsts = Vec::new();

    for (pos, stem) in stems.enumerate() {
        let group = *group_of.entry(stem).or_insert_with(|| {
            firsts.push(pos);
            firsts.len() - 1
        });
        groups.push(group);
    }
    (groups, firsts)
}
