//! Service layer for the venue back office.
//! - Contact enquiries, facilities and photo galleries, each behind a repository trait.
//! - Every store call is bounded by the configured operation timeout.
//! - Resolution notices go out through the [`mail::Notifier`].

pub mod errors;
pub mod store;
pub mod storage;
pub mod mail;
pub mod contact;
pub mod facility;
pub mod gallery;
#[cfg(test)]
pub mod test_support;

pub use contact::ContactService;
pub use facility::FacilityService;
pub use gallery::GalleryService;
