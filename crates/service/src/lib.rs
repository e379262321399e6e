//! Service layer providing the CRUD operations behind the helpdesk tools.
//! - `db` performs the actual storage reads/writes, one transaction per call.
//! - `tools` wraps each data-access call into the response envelope the
//!   remote adaptor serializes back to callers.
//! - Reuses validation and entity definitions in the `models` crate.

pub mod db;
pub mod errors;
pub mod tools;

#[cfg(test)]
pub mod test_support;
