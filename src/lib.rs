//! Cryptomerce WASM front-end.
//!
//! Thin presentation layer over the Cryptomerce shop contract: list active
//! products, add a product, buy a product, request a swap. All state of
//! record and every business rule lives in the on-chain contract; the
//! injected wallet provider handles accounts and signing. Each concern
//! lives in its own module.

pub mod client;
pub mod context;
pub mod descriptor;
pub mod dom;
pub mod error;
pub mod events;
pub mod ops;
pub mod provider;
pub mod render;
pub mod units;

use alloy_primitives::U256;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;
    let ctx = context::AppContext::new(els);
    context::install(&ctx);

    events::bind_events(&ctx);
    ops::load_active_products(&ctx).await;

    Ok(())
}

/// Page-callable swap entry, kept exported under the name the page already
/// uses. Reuses the context installed at startup, client included.
#[wasm_bindgen(js_name = requestSwapForSingleProduct)]
pub async fn request_swap_for_single_product(
    requester_product_id: u64,
    requested_product_id: u64,
) -> Result<(), JsValue> {
    let ctx = context::current()?;
    ops::request_swap_for_single_product(
        &ctx,
        U256::from(requester_product_id),
        U256::from(requested_product_id),
    )
    .await;
    Ok(())
}
