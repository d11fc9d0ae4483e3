pub mod style_service;

pub use style_service::StyleService;
