//! HTTP request handlers

pub mod analysis;
pub mod error;
pub mod health;
pub mod intake;
pub mod results;
