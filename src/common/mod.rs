//! Common code shared across the binary's modules

pub mod logging;
