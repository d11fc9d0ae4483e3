pub mod common;
pub mod styles;
pub mod curations;
