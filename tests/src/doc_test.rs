use crate::{DocOp, ItemLog, LoggingDocument};
use docmap::{Mapped, Mappers, MemoryDocument, Options, Registry};
use std::sync::{Arc, Mutex};

/// Per-test harness.
///
/// Each test gets its own registry cache, so options never leak between
/// tests, and a shared log of every item access made through the documents
/// it hands out.
pub struct DocTest {
    mappers: Mappers,
    ops_log: Arc<Mutex<Vec<DocOp>>>,
}

impl DocTest {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        // Several tests may race to install the subscriber; only the first wins.
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        Self {
            mappers: Mappers::new(options),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Try to build the registry of `T`, returns Result for error handling
    pub fn try_registry<T: Mapped>(&self) -> docmap::Result<Arc<Registry<T>>> {
        self.mappers.get::<T>()
    }

    pub fn registry<T: Mapped>(&self) -> Arc<Registry<T>> {
        self.try_registry::<T>().unwrap()
    }

    pub fn mappers(&self) -> &Mappers {
        &self.mappers
    }

    /// An empty document whose item accesses are logged
    pub fn document(&self) -> LoggingDocument {
        self.document_from(MemoryDocument::new())
    }

    /// Wraps a prepared document so its item accesses are logged
    pub fn document_from(&self, doc: MemoryDocument) -> LoggingDocument {
        LoggingDocument::new(doc, self.ops_log.clone())
    }

    /// Get the operations log for assertions
    pub fn log(&mut self) -> ItemLog {
        ItemLog::new(self.ops_log.clone())
    }
}

impl Default for DocTest {
    fn default() -> Self {
        Self::new()
    }
}
