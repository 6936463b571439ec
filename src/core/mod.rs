//! Core domain logic for apply-labels
//!
//! This module contains the labeling rules with no direct I/O.
//! All external interactions go through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (entries, config, issue snapshots)
//! - `services/` - Eligibility, planning and the applier loop
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
