//! Data models for the initiative tracker

mod character;

pub use character::*;
