//! Photo galleries and the items embedded in them.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::GalleryService;
