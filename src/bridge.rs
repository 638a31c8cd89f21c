//! Thin glue for the CDN libraries the pages drive (AOS, GSAP, EmailJS).
//! Everything goes through `js_sys::Reflect`, so a library that failed to
//! load shows up as an `Err` instead of a thrown exception.

use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

pub fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| format!("encode failed: {err}"))
}

#[cfg(target_arch = "wasm32")]
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let json = to_json(value)?;
    js_sys::JSON::parse(&json).map_err(|_| "json parse failed".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value)
}

#[cfg(target_arch = "wasm32")]
pub fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, String> {
    let method = js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(|_| format!("{name} missing"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("{name} invalid"))?;
    let array = args.iter().collect::<js_sys::Array>();
    js_sys::Reflect::apply(&method, target, &array).map_err(|err| {
        let detail = js_sys::JSON::stringify(&err)
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        format!("{name} failed: {detail}")
    })
}

#[cfg(target_arch = "wasm32")]
pub fn set_property(target: &JsValue, name: &str, value: &JsValue) -> Result<(), String> {
    js_sys::Reflect::set(target, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(|_| format!("{name} set failed"))
}

/// Resolves once `global_name` is available, injecting `src` when needed.
#[cfg(target_arch = "wasm32")]
pub async fn ensure_script(global_name: &str, src: &str) -> Result<(), String> {
    use wasm_bindgen_futures::JsFuture;

    if global(global_name).is_some() {
        return Ok(());
    }
    let window = web_sys::window().ok_or("window unavailable")?;
    let document = window.document().ok_or("document unavailable")?;

    let selector = format!("script[src=\"{src}\"]");
    let existing = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlScriptElement>().ok());

    let script = match existing {
        Some(script) => script,
        None => {
            let script = document
                .create_element("script")
                .map_err(|_| "script create failed")?
                .dyn_into::<web_sys::HtmlScriptElement>()
                .map_err(|_| "script cast failed")?;
            script.set_src(src);
            script.set_async(true);
            document
                .head()
                .ok_or("document head missing")?
                .append_child(&script)
                .map_err(|_| "script append failed")?;
            script
        }
    };

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        let _ = script.add_event_listener_with_callback("load", &resolve);
        let _ = script.add_event_listener_with_callback("error", &reject);
    });
    JsFuture::from(loaded)
        .await
        .map_err(|_| format!("{global_name} script failed to load"))?;

    if global(global_name).is_none() {
        return Err(format!("{global_name} unavailable after load"));
    }
    tracing::debug!("bridge: loaded {global_name}");
    Ok(())
}

/// Resolves after the window `load` event, or immediately when the document
/// has already finished loading.
#[cfg(target_arch = "wasm32")]
pub async fn window_loaded() -> Result<(), String> {
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or("window unavailable")?;
    let document = window.document().ok_or("document unavailable")?;
    if document.ready_state() == "complete" {
        return Ok(());
    }
    let loaded = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = window.add_event_listener_with_callback("load", &resolve);
    });
    JsFuture::from(loaded)
        .await
        .map(|_| ())
        .map_err(|_| "load wait failed".to_string())
}
