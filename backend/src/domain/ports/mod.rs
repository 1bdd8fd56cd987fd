//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod credential_store;
mod sales_query;
mod session_gate;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, HashError};
pub use credential_store::{CredentialStore, InMemoryCredentialStore, StoreError};
pub use sales_query::SalesQuery;
#[cfg(test)]
pub use session_gate::MockSessionGate;
pub use session_gate::{LoginError, SessionGate, SignupError};
