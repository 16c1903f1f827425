//! Pure computation helpers behind each operation.
//!
//! - [`id_generator`] - UUID batches and short link ids
//! - [`hashing`] - md5 / sha256 / sha512 digests and bcrypt
//! - [`base64_codec`] - Base64 encode and decode
//! - [`qr`] - QR code PNG rendering
//! - [`time_convert`] - Instant formatting
//! - [`password`] - Password generation and strength labels
//! - [`json_tool`] - JSON validation and pretty-printing
//! - [`coerce`] - Lenient integer parsing of query parameters
//! - [`location`] - Percent-encoding of redirect targets

pub mod base64_codec;
pub mod coerce;
pub mod hashing;
pub mod id_generator;
pub mod json_tool;
pub mod location;
pub mod password;
pub mod qr;
pub mod time_convert;
