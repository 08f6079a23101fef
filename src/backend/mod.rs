mod api;
mod client;
mod requests;
mod responses;

pub use api::{Api, ApiError};
pub use client::{ClientError, new_client};
pub use requests::LocationDraft;
