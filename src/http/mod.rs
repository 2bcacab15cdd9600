//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the request handler: the content-type
//! table and the response builders. No business logic lives here.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_400_response, build_404_response, build_combined_response};
