//! Operation layer: one function per exposed tool, each wrapping exactly one
//! data-access call and converting its outcome into a response envelope.
//! No error crosses this boundary; every path returns a serializable value.

pub mod catalog;
pub mod envelope;
pub mod requests;
