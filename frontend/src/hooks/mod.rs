//! Custom Yew hooks for the frontend application.

mod use_access_url;

pub use use_access_url::{use_access_url, UseAccessUrl};
