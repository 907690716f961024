pub mod error;
pub mod ingest;
pub mod lock;
pub mod source;
pub mod tracker;
pub mod upsert;

pub use error::{SourceError, SyncError};
pub use ingest::{IngestPlan, IngestReport, IngestionEngine};
pub use lock::WordLocks;
pub use source::SourceEntry;
pub use tracker::ChangeTracker;
pub use upsert::{PendingWord, UpsertCoordinator};
