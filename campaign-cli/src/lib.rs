//! A campaign tools library public API used by command line interface.

pub use campaign_pragmatic as pragmatic;

pub mod extensions;
