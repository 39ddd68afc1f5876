use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Brand output table bundled with the binary.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/brand_output.csv");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One labeled value inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub label: String,
    pub magnitude: f64,
}

/// All values recorded for a single timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    timestamp: i64,
    entries: Vec<Entry>,
}

impl Snapshot {
    pub const fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            entries: Vec::new(),
        }
    }

    /// Builds a snapshot from label/value pairs. A repeated label keeps its
    /// first position and takes the last value.
    pub fn with_entries<I, S>(timestamp: i64, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut snapshot = Self::new(timestamp);
        for (label, magnitude) in entries {
            snapshot.insert(label.into(), magnitude);
        }
        snapshot
    }

    fn insert(&mut self, label: String, magnitude: f64) {
        if let Some(existing) = self.entries.iter_mut().find(|entry| entry.label == label) {
            existing.magnitude = magnitude;
        } else {
            self.entries.push(Entry { label, magnitude });
        }
    }

    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Time-ordered snapshots. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    snapshots: Vec<Snapshot>,
    labels: Vec<String>,
}

impl Series {
    /// Sorts the snapshots ascending by timestamp, keeping the given order
    /// for equal timestamps.
    pub fn from_snapshots(mut snapshots: Vec<Snapshot>) -> Self {
        snapshots.sort_by_key(Snapshot::timestamp);

        let mut labels: Vec<String> = Vec::new();
        for snapshot in &snapshots {
            for entry in snapshot.entries() {
                if !labels.contains(&entry.label) {
                    labels.push(entry.label.clone());
                }
            }
        }

        Self { snapshots, labels }
    }

    /// Parses `timestamp,label,magnitude` rows. Rows that do not parse are
    /// dropped, which also drops a header row.
    pub fn from_csv(text: &str) -> Self {
        let mut snapshots: Vec<Snapshot> = Vec::new();
        let mut positions: HashMap<i64, usize> = HashMap::new();
        let mut dropped = 0_usize;

        for (line_number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((timestamp, label, magnitude)) = parse_row(line) else {
                tracing::trace!(line = line_number + 1, "dropping malformed row");
                dropped += 1;
                continue;
            };

            let index = *positions.entry(timestamp).or_insert_with(|| {
                snapshots.push(Snapshot::new(timestamp));
                snapshots.len() - 1
            });
            snapshots[index].insert(label.to_string(), magnitude);
        }

        if dropped > 0 {
            tracing::debug!(dropped, "skipped malformed dataset rows");
        }

        Self::from_snapshots(snapshots)
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let series = Self::from_csv(&text);
        tracing::debug!(
            path = %path.display(),
            snapshots = series.len(),
            labels = series.labels().len(),
            "dataset loaded"
        );
        Ok(series)
    }

    pub fn embedded() -> Self {
        Self::from_csv(EMBEDDED_DATASET)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.snapshots.len().checked_sub(1)
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshot at `index`, clamped to the last one.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        let last = self.last_index()?;
        self.snapshots.get(index.min(last))
    }

    /// Every label that appears anywhere in the series, in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Stable palette slot for a label.
    pub fn color_index(&self, label: &str) -> usize {
        self.labels
            .iter()
            .position(|known| known == label)
            .unwrap_or(self.labels.len())
    }
}

fn parse_row(line: &str) -> Option<(i64, &str, f64)> {
    let mut fields = line.split(',').map(str::trim);
    let timestamp = fields.next()?.parse::<i64>().ok()?;
    let label = fields.next().filter(|label| !label.is_empty())?;
    let magnitude = fields.next()?.parse::<f64>().ok()?;
    if !magnitude.is_finite() || magnitude < 0.0 {
        return None;
    }
    Some((timestamp, label, magnitude))
}
