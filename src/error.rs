//! Error taxonomy.
//!
//! Three classes, matching what can actually go wrong here: the injected
//! provider is absent, a remote call fails (transport, user rejection,
//! contract revert), or a local conversion fails. Every error is caught at
//! the call site and logged; nothing escalates to a panic and the page stays
//! interactive. Revert payloads are surfaced as opaque strings, not decoded
//! into the contract's declared error kinds.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ethereum provider not found, install MetaMask")]
    ProviderAbsent,

    #[error("provider authorized no accounts")]
    NoAccount,

    #[error("provider call failed: {0}")]
    Rpc(String),

    #[error("could not decode contract response: {0}")]
    Decode(String),

    #[error("invalid price {input:?}: {reason}")]
    InvalidPrice { input: String, reason: String },
}
