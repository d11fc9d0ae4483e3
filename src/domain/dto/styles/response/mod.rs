pub mod style_response;

pub use style_response::{StyleListResponse, StyleResponse};
