pub mod jobs;
pub mod tables;

pub use jobs::{ApiErrorEnvelope, ErrorProto, Job, JobReference, JobState};
pub use tables::{DatasetReference, TableReference, WriteDisposition};
