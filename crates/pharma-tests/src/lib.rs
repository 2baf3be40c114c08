//! Cross-crate test suite for pharmaplot.
//!
//! Checks the published identities between the kinetic and receptor
//! equations through the name-based registry, and renders every stock page
//! end to end.

pub mod helpers;
