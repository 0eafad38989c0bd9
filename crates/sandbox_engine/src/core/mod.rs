//! Core engine types

pub mod config;
