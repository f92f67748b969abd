//! Image input/output helpers
//!
//! Converts user-selected files into reference images for the AI service
//! layer and data URLs back into savable bytes.

pub mod data_url;
pub mod reference;

pub use reference::load_reference;
