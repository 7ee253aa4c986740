pub mod client;

pub use client::{read_json, UpstreamClient};
