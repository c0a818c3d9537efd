//! HTTP request handlers organized by functional area.

pub mod health;
pub mod pages;
pub mod transfer;
