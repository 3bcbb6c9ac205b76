mod client;
mod controller;
mod render;

pub use client::BackendClient;
pub use controller::{SearchController, EMPTY_QUERY_MESSAGE, FETCH_FAILED_STATUS};
pub use render::{render_response, ResultCard, SearchView, EMPTY_RESPONSE, MALFORMED_RESPONSE};
