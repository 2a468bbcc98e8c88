#![doc = include_str!("../README.md")]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod convert;
mod error;
pub use convert::{convert, Conversion};
pub use error::Error;
