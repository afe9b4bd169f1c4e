//! DOM element bindings.
//!
//! All fields are resolved once at startup. To add new UI elements, add a
//! field here and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

pub fn alert(msg: &str) {
    let _ = window().alert_with_message(msg);
}

// ── Elements struct ──

/// All DOM element references used by the shop UI.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub product_list: Element,
    pub add_product_form: HtmlFormElement,
    pub product_name: HtmlInputElement,
    pub product_price: HtmlInputElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_form {
    ($id:expr) => {
        by_id_typed::<HtmlFormElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            product_list: get_el!("productList"),
            add_product_form: get_form!("addProductForm"),
            product_name: get_input!("productName"),
            product_price: get_input!("productPrice"),
        })
    }
}
