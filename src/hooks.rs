#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

/// Observer placement. Either a visibility threshold or a root margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObserveOptions {
    Threshold(f64),
    RootMargin(&'static str),
}

/// Runs `tick` every `period_ms` for as long as the calling component is
/// mounted.
pub fn use_interval<F>(period_ms: i32, tick: F)
where
    F: FnMut() + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        let handle = use_hook(move || start_interval(period_ms, tick).map(Rc::new));
        use_drop(move || {
            if let (Some(handle), Some(window)) = (handle.as_ref(), web_sys::window()) {
                window.clear_interval_with_handle(handle.id);
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (period_ms, tick);
    }
}

#[cfg(target_arch = "wasm32")]
fn start_interval<F>(period_ms: i32, tick: F) -> Option<IntervalHandle>
where
    F: FnMut() + 'static,
{
    let window = web_sys::window()?;
    let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .ok()?;
    Some(IntervalHandle {
        id,
        _closure: closure,
    })
}

/// Attaches `handler` to a window event until unmount.
pub fn use_window_listener<F>(event: &'static str, handler: F)
where
    F: FnMut() + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(move || {
            let mut handler = handler;
            let window = web_sys::window()?;
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| handler())
                as Box<dyn FnMut(web_sys::Event)>);
            window
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .ok()?;
            Some(Rc::new(WindowListener { event, closure }))
        });
        use_drop(move || {
            if let (Some(listener), Some(window)) = (listener.as_ref(), web_sys::window()) {
                let _ = window.remove_event_listener_with_callback(
                    listener.event,
                    listener.closure.as_ref().unchecked_ref(),
                );
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event, handler);
    }
}

/// Observes every element matching `selector` once the component has
/// rendered. `on_entry` receives the element id and whether it intersects.
pub fn use_intersection<F>(selector: &'static str, options: ObserveOptions, on_entry: F)
where
    F: FnMut(String, bool) + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        let mut on_entry = Some(on_entry);
        let mut handle = use_signal(|| None::<Rc<ObserverHandle>>);
        use_effect(move || {
            if handle.peek().is_some() {
                return;
            }
            let Some(on_entry) = on_entry.take() else {
                return;
            };
            match observe_all(selector, options, on_entry) {
                Ok(observer) => handle.set(Some(Rc::new(observer))),
                Err(message) => tracing::debug!("observer {selector}: {message}"),
            }
        });
        use_drop(move || {
            if let Some(handle) = handle.peek().as_ref() {
                handle.observer.disconnect();
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (selector, options, on_entry);
    }
}

#[cfg(target_arch = "wasm32")]
fn observe_all<F>(
    selector: &str,
    options: ObserveOptions,
    mut on_entry: F,
) -> Result<ObserverHandle, String>
where
    F: FnMut(String, bool) + 'static,
{
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("document unavailable")?;
    let targets = document
        .query_selector_all(selector)
        .map_err(|_| "selector invalid")?;
    if targets.length() == 0 {
        return Err("no targets".to_string());
    }

    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                on_entry(entry.target().id(), entry.is_intersecting());
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    match options {
        ObserveOptions::Threshold(threshold) => {
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold))
        }
        ObserveOptions::RootMargin(margin) => init.set_root_margin(margin),
    }
    let observer =
        web_sys::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|_| "observer create failed")?;

    for index in 0..targets.length() {
        if let Some(element) = targets
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            observer.observe(&element);
        }
    }

    Ok(ObserverHandle {
        observer,
        _closure: closure,
    })
}

pub fn window_scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}
