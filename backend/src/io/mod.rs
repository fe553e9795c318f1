//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain. Only REST exists today.

pub mod rest;
