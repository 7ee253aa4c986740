// Mappers - request builders and response parsers for upstream payloads

pub mod submission_details;
