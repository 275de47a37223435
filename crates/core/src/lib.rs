//! Currency logic for the Dropship console.
//!
//! This crate contains pure domain logic with ZERO web dependencies. The
//! rate API is reached through the [`currency::RateProvider`] port.
//!
//! # Modules
//!
//! - `currency` - Currency metadata, country resolution, cached exchange rates
//! - `pricing` - Import-list price conversion from a rate snapshot

pub mod currency;
pub mod pricing;
