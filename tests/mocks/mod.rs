//! Mock extraction backends for API tests
//!
//! Lets the HTTP layer be exercised without yt-dlp or network access.

pub mod mock_source;

pub use mock_source::{MockBehavior, MockSource};
