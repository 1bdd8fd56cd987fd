//! Outbound adapters implementing domain ports.
//!
//! - **credential_file**: JSON file credential store with atomic saves
//! - **argon2_hasher**: Argon2id password hashing
//! - **sales_dataset**: the sales query port over the loaded dataset
//!
//! Adapters are thin translators between domain types and infrastructure.
//! They contain no business logic.

pub mod argon2_hasher;
pub mod credential_file;
mod sales_dataset;
