//! Page mount entry point.

use crate::dom::{self, DomSurface};
use crate::events;
use orbitkit_core::{FeatureCatalog, HostError};
use orbitkit_diagram::OrbitController;
use orbitkit_settings::OrbitConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

fn find_root(document: &web_sys::Document, selector: &str) -> Result<web_sys::Element, HostError> {
    document
        .query_selector(selector)
        .map_err(dom::js_error)?
        .ok_or_else(|| HostError::missing(selector))
}

/// Mounts the diagram found under `root_selector`.
///
/// `features_json` is a JSON array of `{ "id", "label", "description" }`.
/// `config_json` may be empty to use the defaults. A page without the
/// expected elements leaves the diagram inert and returns `Ok`; malformed
/// catalog or config text is an error.
#[wasm_bindgen]
pub fn mount_orbit(root_selector: &str, features_json: &str, config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let catalog = FeatureCatalog::from_json_str(features_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = if config_json.trim().is_empty() {
        OrbitConfig::default()
    } else {
        OrbitConfig::from_json_str(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    let mounted = find_root(&document, root_selector).and_then(|root| {
        let elements = dom::find_elements(&root)?;
        let surface = DomSurface::attach(document.clone(), elements)?;
        let caps = events::probe_capabilities(&window);
        let controller = OrbitController::new(catalog, config, surface).with_capabilities(caps);
        let shared = Rc::new(RefCell::new(controller));
        events::install(&shared, &window, caps);
        shared.borrow_mut().render_all();
        Ok(shared)
    });

    match mounted {
        Ok(shared) => {
            tracing::info!(
                "Orbit diagram mounted at '{}' with {} features",
                root_selector,
                shared.borrow().catalog().len()
            );
        }
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "orbit diagram disabled: {e}"
            )));
        }
    }
    Ok(())
}
