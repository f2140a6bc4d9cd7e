use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::domain::Concern;

/// Curated concern → keyword vocabulary used for fuzzy specialization
/// matching during scoring.
///
/// The table is data, not code: clinical taxonomies evolve independently of
/// the rubric, so deployments may swap in their own JSON table at startup.
/// Lookups for concerns without an entry return an empty slice, which the
/// scoring pass treats as "no match" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcernKeywordTable {
    entries: BTreeMap<Concern, Vec<String>>,
}

#[derive(Debug, Error)]
pub enum KeywordTableError {
    #[error("failed to read keyword table from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("keyword table is not valid JSON")]
    Parse(#[from] serde_json::Error),
}

impl ConcernKeywordTable {
    pub fn new(entries: BTreeMap<Concern, Vec<String>>) -> Self {
        Self { entries }.normalized()
    }

    /// Load a replacement vocabulary from a JSON object keyed by concern
    /// labels, e.g. `{"Anxiety": ["anxiety", "panic"]}`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, KeywordTableError> {
        let table: ConcernKeywordTable = serde_json::from_reader(reader)?;
        Ok(table.normalized())
    }

    pub fn from_path(path: &Path) -> Result<Self, KeywordTableError> {
        let file = File::open(path).map_err(|source| KeywordTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Keywords registered for a concern; empty for unknown concerns.
    pub fn keywords_for(&self, concern: Concern) -> &[String] {
        self.entries
            .get(&concern)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Matching is case-insensitive against lowercased specializations, so
    // the vocabulary itself must be lowercase.
    fn normalized(mut self) -> Self {
        for keywords in self.entries.values_mut() {
            for keyword in keywords.iter_mut() {
                *keyword = keyword.trim().to_lowercase();
            }
            keywords.retain(|keyword| !keyword.is_empty());
        }
        self
    }
}

impl Default for ConcernKeywordTable {
    fn default() -> Self {
        let entries = [
            (
                Concern::Anxiety,
                &[
                    "anxiety",
                    "stress",
                    "panic",
                    "worry",
                    "cognitive behavioral therapy",
                    "cbt",
                ][..],
            ),
            (
                Concern::Depression,
                &[
                    "depression",
                    "mood",
                    "sadness",
                    "bipolar",
                    "major depressive disorder",
                ][..],
            ),
            (
                Concern::Overthinking,
                &["anxiety", "cognitive behavioral therapy", "cbt", "mindfulness"][..],
            ),
            (
                Concern::Stress,
                &["stress", "anxiety", "burnout", "work-life balance"][..],
            ),
            (
                Concern::LowSelfEsteem,
                &["self-esteem", "confidence", "self-worth", "identity"][..],
            ),
            (
                Concern::SelfImprovement,
                &[
                    "personal growth",
                    "self-improvement",
                    "coaching",
                    "positive psychology",
                ][..],
            ),
            (
                Concern::AngerIssues,
                &["anger management", "emotional regulation", "impulse control"][..],
            ),
            (
                Concern::GriefLoss,
                &["grief", "loss", "bereavement", "trauma"][..],
            ),
            (
                Concern::SleepDisturbances,
                &["sleep", "insomnia", "sleep disorders"][..],
            ),
            (
                Concern::Ocd,
                &["ocd", "obsessive compulsive", "anxiety", "exposure therapy"][..],
            ),
            (
                Concern::SexualDysfunction,
                &["sexual health", "intimacy", "relationships", "sex therapy"][..],
            ),
            (
                Concern::BipolarDisorder,
                &["bipolar", "mood disorders", "depression", "mania"][..],
            ),
            (
                Concern::Addiction,
                &["addiction", "substance abuse", "recovery", "12-step"][..],
            ),
            (
                Concern::AutismSpectrumDisorder,
                &["autism", "asd", "developmental", "neurodevelopmental"][..],
            ),
        ]
        .into_iter()
        .map(|(concern, keywords)| {
            (
                concern,
                keywords.iter().map(|keyword| keyword.to_string()).collect(),
            )
        })
        .collect();

        Self { entries }
    }
}
