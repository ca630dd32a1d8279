//! HTTP request handlers

pub mod forecast;
pub mod health;
pub mod line;
