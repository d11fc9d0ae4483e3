pub mod curation_response;

pub use curation_response::{CurationListResponse, CurationResponse};
