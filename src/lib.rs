//! Investor Profile - Questionnaire backend for investor profiling
//!
//! This crate maps a questionnaire's precomputed level onto a shared catalog
//! of investor profiles and registers each respondent against that catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
