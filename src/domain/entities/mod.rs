pub mod styles;
pub mod curations;
