//! refmix - reference-guided image generation via Gemini
//!
//! Takes a text prompt plus ordered reference images, asks Gemini for both
//! IMAGE and TEXT output, and normalizes the response into a data URL and
//! accompanying text.

pub mod ai;
pub mod app;
pub mod error;
pub mod image;
pub mod models;

pub use error::{Error, Result};
