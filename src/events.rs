//! Event binding.
//!
//! Wires the add-product form. The default browser submission is
//! suppressed; the handler runs as an independent spawned future, so two
//! quick submissions run as two independent transactions by design.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::ops;

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(ctx: &AppContext) {
    let ctx2 = ctx.clone();
    let cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        let ctx3 = ctx2.clone();
        wasm_bindgen_futures::spawn_local(async move {
            ops::on_add_product(&ctx3).await;
        });
    }) as Box<dyn FnMut(_)>);
    ctx.els
        .add_product_form
        .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
