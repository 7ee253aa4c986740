// Handlers module - API endpoint handlers

pub mod auth_check;
pub mod graphql;
pub mod submission_details;
pub mod submissions;
