pub mod curation_service;

pub use curation_service::CurationService;
