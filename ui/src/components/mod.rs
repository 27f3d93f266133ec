//! User Interface Components
//!
//! This module contains reusable Dioxus components for the login screen:
//!
//! - **forms**: the credential form and its submission flow
//! - **display**: alert banners and progress indicators
//! - **input**: validated input fields and form controls
//!
//! All components are designed to work within the Dioxus framework and
//! target WASM deployment.

pub mod display;
pub mod forms;
pub mod input;
