pub mod config;
pub mod submission;

pub use config::AppConfig;
pub use submission::{DistributionBucket, GraphQlRequest, Submission, SubmissionsPage};
