mod doc_test;
pub mod fixtures;
mod item_log;
mod logging_document;
pub mod prelude;

pub use doc_test::DocTest;
pub use item_log::ItemLog;
pub use logging_document::{DocOp, LoggingDocument};

pub use std_util::*;
