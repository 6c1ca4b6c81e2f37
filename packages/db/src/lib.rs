//! Database layer for Robusta, a platform that evaluates the adversarial
//! robustness of uploaded ML models.
//!
//! This crate owns the schema (the [`entity`] module) and ships a small CLI
//! (`robusta-db`) that resets and seeds the database for manual testing. The
//! web application and the evaluation pipeline live elsewhere; they only share
//! these entity definitions.

pub mod config;
pub mod database;
pub mod entity;
pub mod feedback;
pub mod seed;
pub mod submission_status;
