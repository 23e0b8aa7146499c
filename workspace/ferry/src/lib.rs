pub mod constants;
pub mod errors;
pub mod names;
pub mod plan;
pub mod sql;

mod job;

pub use errors::{ConfigViolation, IdentifierViolation, WarehouseError};
pub use job::FinishedJob;
pub use plan::{CopyPlan, MaterializePlan};
