use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Readiness flag gating the map: flips to true once the device
/// geolocation probe resolves. The reported coordinates are discarded —
/// the probe only signals that geolocation is available, and the map
/// centers on the record's stored position regardless.
///
/// If permission is denied, the API is missing, or the probe never
/// resolves, the flag stays false and the map is never shown. There is no
/// timeout and no fallback center.
#[hook]
pub fn use_geolocation_ready() -> bool {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            let geolocation = web_sys::window()
                .and_then(|window| window.navigator().geolocation().ok());
            let Some(geolocation) = geolocation else {
                tracing::debug!("geolocation API unavailable, map disabled");
                return;
            };

            let on_resolve =
                Closure::wrap(Box::new(move |_position: web_sys::Position| {
                    ready.set(true);
                })
                    as Box<dyn FnMut(web_sys::Position)>);

            if geolocation
                .get_current_position(on_resolve.as_ref().unchecked_ref())
                .is_ok()
            {
                on_resolve.forget();
            }
        });
    }

    *ready
}
