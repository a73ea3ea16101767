//! Contains command line interface extensions.

pub mod config;
