//! Infrastructure layer implementing the domain storage traits.
//!
//! - [`persistence`] - Link store implementations

pub mod persistence;
