//! Core domain entities.
//!
//! - [`ShortLink`] - A shortened URL with its click count

pub mod short_link;

pub use short_link::ShortLink;
