//! Built-in header line transformations.
//!
//! Each transformer owns one rewriting rule: dropping denylisted headers,
//! replacing the domain suffix of the `From` address, and marking the
//! `Message-ID` value.

pub mod denylist;
pub mod from_domain;
pub mod message_id;

pub use denylist::*;
pub use from_domain::*;
pub use message_id::*;
