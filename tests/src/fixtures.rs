//! Business types shared by the scenario tests.

mod person;
pub use person::{Person, PersonDigest};

mod task;
pub use task::{Task, TaskDigest, TaskType};
