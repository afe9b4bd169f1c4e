//! Read and write paths.
//!
//! Each `on_*` function is one complete user action. Failures are logged to
//! the console and the page stays interactive; a failed read leaves the
//! previously rendered list untouched, a failed write leaves the form
//! intact for resubmission. Overlapping invocations are deliberately
//! independent: two quick form submissions produce two transactions.
//!
//! The contract-facing halves are separate generic functions so they can be
//! exercised against a recording provider; the `on_*` wrappers add the DOM
//! edges (inputs, alert, render).

use gloo_console::error;

use alloy_primitives::U256;

use crate::client::ContractClient;
use crate::context::AppContext;
use crate::descriptor::Product;
use crate::dom;
use crate::error::Error;
use crate::provider::Provider;
use crate::render;
use crate::units;

/// Read path: fetch the active products and reflect them into the list.
pub async fn load_active_products(ctx: &AppContext) {
    let client = match ctx.client() {
        Ok(client) => client,
        Err(e) => {
            error!(format!("Error fetching active products: {e}"));
            return;
        }
    };

    match fetch_active_products(&client).await {
        Ok(products) => render::display_products(ctx, &products),
        Err(e) => error!(format!("Error fetching active products: {e}")),
    }
}

/// Write path: submit `addProduct` from the form fields. On success the
/// user is notified and the refreshed snapshot is rendered.
pub async fn on_add_product(ctx: &AppContext) {
    let name = dom::get_input_value(&ctx.els.product_name);
    let price_raw = dom::get_input_value(&ctx.els.product_price);

    let price = match units::to_wei(&price_raw) {
        Ok(price) => price,
        Err(e) => {
            error!(format!("Error adding product: {e}"));
            return;
        }
    };

    let client = match ctx.client() {
        Ok(client) => client,
        Err(e) => {
            error!(format!("Error adding product: {e}"));
            return;
        }
    };

    match add_product_and_refresh(&client, name, price).await {
        Ok(products) => {
            dom::alert("Product added successfully!");
            render::display_products(ctx, &products);
        }
        Err(e) => error!(format!("Error adding product: {e}")),
    }
}

/// Write path: buy a product, sending its price as the transaction value.
pub async fn on_buy_product(ctx: &AppContext, product_id: U256, price: U256) {
    let client = match ctx.client() {
        Ok(client) => client,
        Err(e) => {
            error!(format!("Error buying product: {e}"));
            return;
        }
    };

    match buy_product_and_refresh(&client, product_id, price).await {
        Ok(products) => {
            dom::alert("Product purchased successfully!");
            render::display_products(ctx, &products);
        }
        Err(e) => error!(format!("Error buying product: {e}")),
    }
}

/// Write path: request a swap between two products. No refresh afterwards;
/// the swap does not change the active-product list.
pub async fn request_swap_for_single_product(
    ctx: &AppContext,
    requester_product_id: U256,
    requested_product_id: U256,
) {
    let client = match ctx.client() {
        Ok(client) => client,
        Err(e) => {
            error!(format!("Error requesting swap: {e}"));
            return;
        }
    };

    let result = async {
        let from = active_account(&client).await?;
        client
            .request_swap_for_single_product(&from, requester_product_id, requested_product_id)
            .await
    }
    .await;

    match result {
        Ok(_) => dom::alert("Swap request sent successfully!"),
        Err(e) => error!(format!("Error requesting swap: {e}")),
    }
}

// ── Contract-facing halves ──

/// Request account access, then read the active-product snapshot.
pub async fn fetch_active_products<P: Provider>(
    client: &ContractClient<P>,
) -> Result<Vec<Product>, Error> {
    client.provider().request_accounts().await?;
    client.get_active_products().await
}

/// Submit `addProduct`, then re-read the active list exactly once. The read
/// is issued only after the provider has acknowledged the submission, never
/// before; inclusion in the ledger is not awaited, so the snapshot may
/// still race the transaction.
pub async fn add_product_and_refresh<P: Provider>(
    client: &ContractClient<P>,
    name: String,
    price: U256,
) -> Result<Vec<Product>, Error> {
    let from = active_account(client).await?;
    client.add_product(&from, name, price).await?;
    client.get_active_products().await
}

/// Submit `buyProduct` with the price as value, then re-read the list once.
pub async fn buy_product_and_refresh<P: Provider>(
    client: &ContractClient<P>,
    product_id: U256,
    price: U256,
) -> Result<Vec<Product>, Error> {
    let from = active_account(client).await?;
    client.buy_product(&from, product_id, price).await?;
    client.get_active_products().await
}

async fn active_account<P: Provider>(client: &ContractClient<P>) -> Result<String, Error> {
    let accounts = client.provider().request_accounts().await?;
    accounts.into_iter().next().ok_or(Error::NoAccount)
}
