#![deny(clippy::complexity, clippy::style, clippy::perf)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod generator;
pub mod populate;

pub use error::{Error, Result};
pub use generator::{Draw, UniformInt};
pub use populate::{append_generated, fill_existing};
