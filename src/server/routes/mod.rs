//! HTTP Routes

pub mod emotion;
pub mod health;
pub mod index;
