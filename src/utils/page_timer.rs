use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use yew::prelude::*;

/// Whole seconds between two `Date.now()` readings, rounded.
pub fn seconds_between(start_ms: f64, end_ms: f64) -> i64 {
    ((end_ms - start_ms) / 1000.0).round() as i64
}

/// Logs how long the visitor stayed when the page unloads. Stand-in for an
/// analytics call.
#[hook]
pub fn use_time_on_page() {
    use_effect_with_deps(
        move |_| {
            let started = js_sys::Date::now();
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let callback = Closure::<dyn Fn()>::new(move || {
                    let spent = seconds_between(started, js_sys::Date::now());
                    gloo_console::log!(format!("Tempo gasto na página: {} segundos", spent));
                });
                match window
                    .add_event_listener_with_callback("beforeunload", callback.as_ref().unchecked_ref())
                {
                    Ok(()) => Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "beforeunload",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }),
                    Err(err) => {
                        log::warn!("beforeunload listener not registered: {:?}", err);
                        Box::new(|| ())
                    }
                }
            } else {
                Box::new(|| ())
            };
            move || destructor()
        },
        (),
    );
}
