use crate::directory::client::LawyerSource;
use crate::domain::merge::merge;
use crate::domain::ListingRecord;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use std::thread::JoinHandle;

/// Where the currently displayed records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Fallback,
    Merged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Merged { fetched: usize, total: usize },
    Fallback,
}

struct Snapshot {
    records: Arc<Vec<ListingRecord>>,
    source: DataSource,
}

/// Owns the displayed directory.
///
/// Starts out serving the fallback set so the very first request has data.
/// A single successful load swaps in the merged set; a failed load leaves
/// the fallback in place.
pub struct Directory {
    fallback: Arc<Vec<ListingRecord>>,
    current: RwLock<Snapshot>,
}

impl Directory {
    pub fn new(fallback: Vec<ListingRecord>) -> Self {
        let fallback = Arc::new(fallback);
        Self {
            current: RwLock::new(Snapshot {
                records: Arc::clone(&fallback),
                source: DataSource::Fallback,
            }),
            fallback,
        }
    }

    /// The records to display right now. Cheap: clones an `Arc`.
    pub fn records(&self) -> Arc<Vec<ListingRecord>> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard.records)
    }

    pub fn source(&self) -> DataSource {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .source
    }

    pub fn fallback(&self) -> &[ListingRecord] {
        &self.fallback
    }

    pub fn find(&self, id: &str) -> Option<ListingRecord> {
        self.records().iter().find(|r| r.id == id).cloned()
    }

    /// Fetches once and merges. Errors are logged and swallowed; the
    /// displayed set is then the fallback alone.
    pub fn load(&self, source: &dyn LawyerSource) -> LoadOutcome {
        match source.fetch_lawyers() {
            Ok(fetched) => {
                let fetched_count = fetched.len();
                let merged = merge(fetched, &self.fallback);
                let total = merged.len();

                self.replace(Arc::new(merged), DataSource::Merged);
                tracing::info!(fetched = fetched_count, total, "directory merged with live data");

                LoadOutcome::Merged {
                    fetched: fetched_count,
                    total,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch lawyers, serving fallback directory");
                self.replace(Arc::clone(&self.fallback), DataSource::Fallback);
                LoadOutcome::Fallback
            }
        }
    }

    fn replace(&self, records: Arc<Vec<ListingRecord>>, source: DataSource) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Snapshot { records, source };
    }
}

/// Runs the one-time load on its own thread. Nothing waits on it and
/// nothing cancels it; the server keeps answering from the fallback set
/// until it finishes.
pub fn spawn_initial_load<S>(directory: Arc<Directory>, source: S) -> JoinHandle<LoadOutcome>
where
    S: LawyerSource + Send + 'static,
{
    std::thread::spawn(move || {
        tracing::debug!("initial directory load started");
        directory.load(&source)
    })
}
