//! Product list rendering.
//!
//! Reflects the last successful read into the visible list. Rendering is a
//! pure function of its input snapshot: the container is cleared first and
//! rebuilt in input order, so a re-render with the same snapshot is
//! idempotent and there is never a partial update.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use alloy_primitives::U256;

use crate::context::AppContext;
use crate::descriptor::Product;
use crate::dom;
use crate::ops;

/// Clear the list container and render one row per active product.
pub fn display_products(ctx: &AppContext, products: &[Product]) {
    let list = &ctx.els.product_list;
    dom::set_inner_html(list, "");

    for product in active_products(products) {
        let item = dom::create_element("li");
        dom::set_text(&item, &format_product_line(product));

        wire_buy_button(ctx, &item, product.id, product.price);
        list.append_child(&item).unwrap();
    }
}

/// The contract already returns active-only products from
/// `getActiveProducts`; this re-filter is a defensive no-op kept so the
/// render path holds its own guarantee regardless of the read path used.
pub fn active_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.isActive).collect()
}

/// One display line per product. Price is printed in the contract's own
/// units, as recorded on chain.
pub fn format_product_line(product: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Price: {} ETH",
        product.id, product.name, product.price
    )
}

fn wire_buy_button(ctx: &AppContext, item: &web_sys::Element, id: U256, price: U256) {
    let btn = dom::create_element("button");
    dom::set_text(&btn, "Buy");
    btn.set_attribute("class", "buy-btn").unwrap();

    let ctx2 = ctx.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        let ctx3 = ctx2.clone();
        wasm_bindgen_futures::spawn_local(async move {
            ops::on_buy_product(&ctx3, id, price).await;
        });
    }) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    item.append_child(&btn).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, price: u64, is_active: bool) -> Product {
        Product {
            id: U256::from(id),
            name: name.to_string(),
            price: U256::from(price),
            isActive: is_active,
        }
    }

    #[test]
    fn line_format_matches_display_contract() {
        let p = product(1, "A", 1000, true);
        assert_eq!(format_product_line(&p), "ID: 1, Name: A, Price: 1000 ETH");
    }

    #[test]
    fn only_active_products_are_rendered() {
        let products = vec![
            product(1, "A", 1000, true),
            product(2, "B", 2000, false),
        ];
        let active = active_products(&products);
        assert_eq!(active.len(), 1);
        assert_eq!(format_product_line(active[0]), "ID: 1, Name: A, Price: 1000 ETH");
    }

    #[test]
    fn input_order_is_preserved() {
        let products = vec![
            product(3, "C", 30, true),
            product(1, "A", 10, true),
            product(2, "B", 20, false),
        ];
        let ids: Vec<_> = active_products(&products).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![U256::from(3u64), U256::from(1u64)]);
    }

    #[test]
    fn empty_snapshot_renders_nothing() {
        assert!(active_products(&[]).is_empty());
    }
}
