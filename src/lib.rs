//! Limelight - Celebrity Influence Tracking Backend
//!
//! This crate turns free-form generative-AI responses into validated
//! celebrity profiles and seven-dimension influence scorecards with a
//! derived letter rank.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
