//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{SalesQuery, SessionGate};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Signup and login.
    pub gate: Arc<dyn SessionGate>,
    /// Read-only dataset statistics.
    pub sales: Arc<dyn SalesQuery>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::AccountService;
    /// use backend::domain::ports::InMemoryCredentialStore;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::argon2_hasher::Argon2Hasher;
    /// use sales_data::SalesDataset;
    ///
    /// let gate = AccountService::new(
    ///     Arc::new(InMemoryCredentialStore::default()),
    ///     Arc::new(Argon2Hasher::new()),
    /// );
    /// let header = "Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales\n";
    /// let dataset = SalesDataset::from_reader(header.as_bytes()).expect("csv");
    /// let state = HttpState::new(Arc::new(gate), Arc::new(dataset));
    /// assert!(state.sales.records().is_empty());
    /// ```
    pub fn new(gate: Arc<dyn SessionGate>, sales: Arc<dyn SalesQuery>) -> Self {
        Self { gate, sales }
    }
}
