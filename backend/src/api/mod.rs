//! API module
//!
//! Contains HTTP request handlers for the activity endpoints

pub mod activities;
pub mod health;
