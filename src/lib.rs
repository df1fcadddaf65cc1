//! Nimathi - reward points, tiers, and stress tracking for the Nimathi wellness app.
//!
//! Completed meditation, drawing, and journaling sessions earn points that
//! place the user in a reward tier. Self-reported stress ratings are kept
//! in a rolling 30-day ledger on the user's profile.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
