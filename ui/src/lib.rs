//! This crate contains all shared UI components for the login screen.

pub mod app;
pub use app::LoginPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
