//! Contact inquiries: CRUD plus the resolution notice sent when an inquiry
//! is marked done.

pub mod domain;
pub mod notification;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::ContactService;
