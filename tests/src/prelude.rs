//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

// Re-export core test infrastructure
pub use crate::{DocOp, DocTest, ItemLog, LoggingDocument};

// Re-export fixtures
pub use crate::fixtures::{Person, PersonDigest, Task, TaskDigest, TaskType};

// Re-export assertion macros
pub use std_util::prelude::*;
