//! Hydro-Decisio - Water-supply decision support
//!
//! This crate weighs supply options (public network, private borehole,
//! hybrid) with the Analytic Hierarchy Process: pairwise criterion
//! judgments give priority weights and a consistency ratio, which then
//! score and rank the options of a study zone.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
