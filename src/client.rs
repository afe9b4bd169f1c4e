//! Contract client.
//!
//! Binds the descriptor address to a provider. One method per descriptor
//! operation: view calls go through `eth_call`, state-changing ones through
//! `eth_sendTransaction`. Encoding and decoding are delegated to the
//! `sol!`-generated call types. Generic over `Provider` so the paths built
//! on top can be exercised against a recording provider.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

use crate::descriptor::{
    addProductCall, buyProductCall, disableProductCall, getActiveProductsCall,
    getAllProductsCall, getContractOwnerCall, getProductCall, requestSwapForSingleProductCall,
    s_productIdToOwnerCall, Product,
};
use crate::error::Error;
use crate::provider::{EthereumProvider, Provider};

#[derive(Clone)]
pub struct ContractClient<P = EthereumProvider> {
    provider: P,
    address: Address,
}

impl<P: Provider> ContractClient<P> {
    pub fn new(provider: P, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    // ── View operations ──

    /// Products already filtered to active-only by the contract.
    pub async fn get_active_products(&self) -> Result<Vec<Product>, Error> {
        let raw = self.view(getActiveProductsCall {}.abi_encode()).await?;
        getActiveProductsCall::abi_decode_returns(&raw).map_err(|e| Error::Decode(e.to_string()))
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>, Error> {
        let raw = self.view(getAllProductsCall {}.abi_encode()).await?;
        getAllProductsCall::abi_decode_returns(&raw).map_err(|e| Error::Decode(e.to_string()))
    }

    pub async fn get_contract_owner(&self) -> Result<Address, Error> {
        let raw = self.view(getContractOwnerCall {}.abi_encode()).await?;
        getContractOwnerCall::abi_decode_returns(&raw).map_err(|e| Error::Decode(e.to_string()))
    }

    pub async fn get_product(&self, index: U256) -> Result<Product, Error> {
        let raw = self.view(getProductCall { index }.abi_encode()).await?;
        getProductCall::abi_decode_returns(&raw).map_err(|e| Error::Decode(e.to_string()))
    }

    pub async fn product_owner(&self, id: U256) -> Result<Address, Error> {
        let raw = self.view(s_productIdToOwnerCall { id }.abi_encode()).await?;
        s_productIdToOwnerCall::abi_decode_returns(&raw).map_err(|e| Error::Decode(e.to_string()))
    }

    // ── State-changing operations ──

    pub async fn add_product(&self, from: &str, name: String, price: U256) -> Result<String, Error> {
        let data = addProductCall { name, price }.abi_encode();
        self.provider.send_transaction(from, self.address, &data, None).await
    }

    /// `buyProduct` is payable; `value` must cover the product price or the
    /// contract reverts with `Cryptomerce__InsufficientValueSent`.
    pub async fn buy_product(
        &self,
        from: &str,
        product_id: U256,
        value: U256,
    ) -> Result<String, Error> {
        let data = buyProductCall { productId: product_id }.abi_encode();
        self.provider.send_transaction(from, self.address, &data, Some(value)).await
    }

    pub async fn disable_product(&self, from: &str, id: U256) -> Result<String, Error> {
        let data = disableProductCall { id }.abi_encode();
        self.provider.send_transaction(from, self.address, &data, None).await
    }

    pub async fn request_swap_for_single_product(
        &self,
        from: &str,
        requester_product_id: U256,
        requested_product_id: U256,
    ) -> Result<String, Error> {
        let data = requestSwapForSingleProductCall {
            requesterProductId: requester_product_id,
            requestedProductId: requested_product_id,
        }
        .abi_encode();
        self.provider.send_transaction(from, self.address, &data, None).await
    }

    async fn view(&self, calldata: Vec<u8>) -> Result<Vec<u8>, Error> {
        self.provider.call(self.address, &calldata).await
    }
}
