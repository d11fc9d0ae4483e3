pub mod curation_repository;

pub use curation_repository::CurationRepository;
