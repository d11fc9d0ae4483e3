pub mod style_repository;

pub use style_repository::StyleRepository;
