//! Application context.
//!
//! Owns the resolved DOM elements and a single lazily-built contract
//! client. Handlers clone the context; every clone shares the same client
//! cell, so the client is constructed once per page load and never per
//! call. The context created at startup is installed in instance-local
//! storage so page-callable exports reuse it instead of rebinding.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::client::ContractClient;
use crate::descriptor;
use crate::dom::Elements;
use crate::error::Error;
use crate::provider::EthereumProvider;

#[derive(Clone)]
pub struct AppContext {
    pub els: Elements,
    client: LazyShared<ContractClient>,
}

impl AppContext {
    pub fn new(els: Elements) -> Self {
        Self {
            els,
            client: LazyShared::new(),
        }
    }

    /// The contract client, building it on first use. Fails with
    /// `ProviderAbsent` when no wallet is injected.
    pub fn client(&self) -> Result<ContractClient, Error> {
        self.client.get_or_try_init(|| {
            let provider = EthereumProvider::detect()?;
            Ok(ContractClient::new(provider, descriptor::CONTRACT_ADDRESS))
        })
    }
}

// ── Instance-local context ──

thread_local! {
    static CONTEXT: RefCell<Option<AppContext>> = const { RefCell::new(None) };
}

/// Install the page's context. Called once at startup.
pub fn install(ctx: &AppContext) {
    CONTEXT.with(|c| *c.borrow_mut() = Some(ctx.clone()));
}

/// The installed context. Binds a fresh one (and installs it) only when an
/// export is called before `start` has run.
pub fn current() -> Result<AppContext, JsValue> {
    if let Some(ctx) = CONTEXT.with(|c| c.borrow().clone()) {
        return Ok(ctx);
    }
    let ctx = AppContext::new(Elements::bind()?);
    install(&ctx);
    Ok(ctx)
}

// ── Shared lazy cell ──

/// Lazily-initialized value shared across clones: whichever clone
/// initializes first, every other clone observes the same value.
#[derive(Clone)]
struct LazyShared<T> {
    cell: Rc<RefCell<Option<T>>>,
}

impl<T: Clone> LazyShared<T> {
    fn new() -> Self {
        Self {
            cell: Rc::new(RefCell::new(None)),
        }
    }

    fn get_or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if let Some(value) = self.cell.borrow().as_ref() {
            return Ok(value.clone());
        }
        let value = init()?;
        *self.cell.borrow_mut() = Some(value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_initialization() {
        let cell: LazyShared<u32> = LazyShared::new();
        let clone = cell.clone();
        let mut builds = 0;

        let first: Result<u32, ()> = cell.get_or_try_init(|| {
            builds += 1;
            Ok(7)
        });
        let second: Result<u32, ()> = clone.get_or_try_init(|| {
            builds += 1;
            Ok(8)
        });

        assert_eq!(first.unwrap(), 7);
        // The clone sees the value built through the original, not a
        // rebuilt one.
        assert_eq!(second.unwrap(), 7);
        assert_eq!(builds, 1);
    }

    #[test]
    fn failed_initialization_is_retried() {
        let cell: LazyShared<u32> = LazyShared::new();

        let failed: Result<u32, &str> = cell.get_or_try_init(|| Err("no provider"));
        assert!(failed.is_err());

        // Absence is not cached; a later attempt may succeed.
        let ok: Result<u32, &str> = cell.get_or_try_init(|| Ok(7));
        assert_eq!(ok.unwrap(), 7);
    }
}
