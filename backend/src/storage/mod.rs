//! # Storage Module
//!
//! Persistence for the intake service. Only an in-memory backend exists; the
//! domain talks to it through [`DonationStorage`], so a durable backend can be
//! added without touching the services.

pub mod memory;
pub mod traits;

pub use traits::{Connection, DonationStorage};
