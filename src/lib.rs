pub mod boundary;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod source;
pub mod ui;

pub use error::{Result, VersionPickError};
