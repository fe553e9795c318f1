//! # Domain Module
//!
//! Business rules for donation intake. Services here work on domain models and
//! commands only; HTTP types stay in [`crate::io`] and persistence stays behind
//! the traits in [`crate::storage`].
//!
//! ## Business Rules
//!
//! - Amount must be present and at least 1 EUR
//! - Email, last name and first name are required before the full schema runs
//! - Every field rule of the shared donation schema applies server side
//! - Accepted donations get a `DON-` id and always start as pending

pub mod commands;
pub mod donation_service;
pub mod models;

pub use donation_service::DonationService;
