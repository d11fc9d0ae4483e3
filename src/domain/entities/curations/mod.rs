pub mod curation;

pub use curation::Curation;
