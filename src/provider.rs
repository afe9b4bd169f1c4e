//! Provider gateway.
//!
//! Wraps the browser-injected EIP-1193 wallet object (`window.ethereum`).
//! Account access, signing and ledger state stay on the provider's side of
//! the boundary; this module only marshals `request({ method, params })`
//! promises across the JS boundary. The `Provider` trait is the seam the
//! contract client talks through.

use async_trait::async_trait;
use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use alloy_primitives::{hex, Address, U256};

use crate::error::Error;

/// The three provider operations the UI needs. Implemented by the injected
/// wallet object in the browser.
#[async_trait(?Send)]
pub trait Provider {
    /// `eth_requestAccounts`. Idempotent once access has been granted; the
    /// first entry is the active account.
    async fn request_accounts(&self) -> Result<Vec<String>, Error>;

    /// A read-only call against the latest block, returning raw return data.
    async fn call(&self, to: Address, calldata: &[u8]) -> Result<Vec<u8>, Error>;

    /// A state-changing transaction. Returns the transaction hash;
    /// inclusion in the ledger is not awaited.
    async fn send_transaction(
        &self,
        from: &str,
        to: Address,
        calldata: &[u8],
        value: Option<U256>,
    ) -> Result<String, Error>;
}

/// Handle to the injected wallet object. Cheap to clone, JS-GC backed.
#[derive(Clone)]
pub struct EthereumProvider {
    inner: JsValue,
}

impl EthereumProvider {
    /// Look up `window.ethereum`. Absence is an ordinary error, not a panic.
    pub fn detect() -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::ProviderAbsent)?;
        let eth = Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map_err(|_| Error::ProviderAbsent)?;
        if eth.is_undefined() || eth.is_null() {
            return Err(Error::ProviderAbsent);
        }
        Ok(Self { inner: eth })
    }

    /// Issue a single `request` call and await its promise.
    async fn request(&self, method: &str, params: serde_json::Value) -> Result<JsValue, Error> {
        let request_fn = Reflect::get(&self.inner, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| Error::Rpc("provider has no request method".to_string()))?;

        let args = js_sys::Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(js_err)?;
        // Plain JS objects, not Maps, or the provider rejects the params.
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| Error::Rpc(e.to_string()))?;
        Reflect::set(&args, &JsValue::from_str("params"), &params).map_err(js_err)?;

        let promise: js_sys::Promise = request_fn
            .call1(&self.inner, &args)
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| Error::Rpc("provider request did not return a promise".to_string()))?;

        JsFuture::from(promise).await.map_err(js_err)
    }
}

#[async_trait(?Send)]
impl Provider for EthereumProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, Error> {
        let result = self.request("eth_requestAccounts", serde_json::json!([])).await?;
        serde_wasm_bindgen::from_value(result).map_err(|e| Error::Rpc(e.to_string()))
    }

    async fn call(&self, to: Address, calldata: &[u8]) -> Result<Vec<u8>, Error> {
        let params = serde_json::json!([
            { "to": to.to_string(), "data": hex::encode_prefixed(calldata) },
            "latest",
        ]);
        let result = self.request("eth_call", params).await?;
        let raw = result
            .as_string()
            .ok_or_else(|| Error::Decode("eth_call did not return a string".to_string()))?;
        hex::decode(&raw).map_err(|e| Error::Decode(e.to_string()))
    }

    async fn send_transaction(
        &self,
        from: &str,
        to: Address,
        calldata: &[u8],
        value: Option<U256>,
    ) -> Result<String, Error> {
        let mut tx = serde_json::json!({
            "from": from,
            "to": to.to_string(),
            "data": hex::encode_prefixed(calldata),
        });
        if let Some(value) = value {
            tx["value"] = serde_json::Value::String(format!("{value:#x}"));
        }
        let result = self.request("eth_sendTransaction", serde_json::json!([tx])).await?;
        Ok(result.as_string().unwrap_or_default())
    }
}

fn js_err(e: JsValue) -> Error {
    Error::Rpc(format!("{e:?}"))
}
