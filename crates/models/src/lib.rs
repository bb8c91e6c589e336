//! SeaORM entities for the three document families plus connection helpers.

pub mod errors;
pub mod db;
pub mod contact;
pub mod facility;
pub mod gallery;
