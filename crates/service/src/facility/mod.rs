//! Bookable facilities (pool, terrace, hall, ...).

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::FacilityService;
