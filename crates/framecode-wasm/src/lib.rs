//! WASM bindings for framecode.
//!
//! Exposes `render()` to a design-tool plugin via wasm-bindgen.
//! Returns a JS object `{ markup, textStyles }` or throws on error.

use framecode_codegen::RenderSettings;
use framecode_scene::{Scene, SceneError};
use wasm_bindgen::prelude::*;

/// Markup and text-style report for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub markup: String,
    pub text_styles: String,
}

/// Load the scene JSON and render it.
pub fn render_scene(scene_json: &str, settings: &RenderSettings) -> Result<Rendered, SceneError> {
    let scene = Scene::from_json(scene_json)?;
    let output = framecode_codegen::generate(&scene.nodes, settings);
    Ok(Rendered {
        markup: output.markup,
        text_styles: output.text_styles.report(settings.jsx),
    })
}

/// Render a serialized selection to HTML or JSX.
///
/// `settings` is a plain object `{ layerName, jsx, optimizeLayout }`; missing
/// fields default to `false`, and `undefined` means all defaults.
/// Returns `{ markup: string, textStyles: string }`.
/// Throws a JS error if the scene or the settings cannot be read.
#[wasm_bindgen]
pub fn render(scene_json: &str, settings: JsValue) -> Result<JsValue, JsError> {
    let settings: RenderSettings = if settings.is_undefined() || settings.is_null() {
        RenderSettings::default()
    } else {
        serde_wasm_bindgen::from_value(settings).map_err(|e| JsError::new(&e.to_string()))?
    };

    let rendered = render_scene(scene_json, &settings).map_err(|e| JsError::new(&e.to_string()))?;

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"markup".into(), &rendered.markup.into())
        .map_err(|_| JsError::new("Failed to set markup property"))?;
    js_sys::Reflect::set(&js_obj, &"textStyles".into(), &rendered.text_styles.into())
        .map_err(|_| JsError::new("Failed to set textStyles property"))?;

    Ok(js_obj.into())
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
