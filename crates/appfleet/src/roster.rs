//! Roster loading
//!
//! A roster is a headerless CSV file; the first column of each record is a
//! person's name. Other columns are ignored, so a class list exported from a
//! spreadsheet can be used as-is. Lines with no content at all are skipped;
//! a line with content but an empty first column is an error.

use anyhow::Context;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

/// Turn a display name into something usable inside a user id
/// ("Ada  Lovelace" → "Ada-Lovelace")
fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("-")
}

impl Roster {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| normalize_name(n.as_ref()))
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    pub fn from_reader<R: std::io::Read>(input: R) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut names = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("invalid CSV record {}", index + 1))?;
            if record.iter().all(str::is_empty) {
                continue;
            }

            match record.get(0) {
                Some(first) if !first.is_empty() => names.push(first.to_string()),
                _ => {
                    let line = record.position().map_or(index as u64 + 1, |p| p.line());
                    anyhow::bail!("line {}: first column (name) is empty", line);
                }
            }
        }

        Ok(Self::from_names(names))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open roster {}", path.display()))?;
        let roster = Self::from_reader(file)
            .with_context(|| format!("failed to read roster {}", path.display()))?;

        if roster.is_empty() {
            anyhow::bail!("roster {} contains no names", path.display());
        }

        tracing::debug!("Loaded {} names from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
