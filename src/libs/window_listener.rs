/// Window-level event listeners bridged into the component tree.
///
/// The JS side stores each handler under a unique id so that unmounting a component
/// removes exactly the listener it installed, even across repeated mount/unmount cycles.
use crate::utils::constants::CSS_ID_PREFIX;
use crate::{ debug_eprint, debug_print };
use dioxus::document::{ eval, EvalError };
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use std::sync::atomic::{ AtomicU64, Ordering };

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// `KeyboardEvent.key` of every keydown, always a string.
/// Synthetic keydowns (autofill) carry no `key` and arrive as "".
pub const KEY_PAYLOAD: &str = "String(event.key ?? \"\")";

/// Scroll position in the shape of `utils::motion::ScrollMetrics`, always numeric
pub const SCROLL_PAYLOAD: &str =
    "({ scroll_y: Number(window.scrollY) || 0, scroll_height: Number(document.documentElement.scrollHeight) || 0, viewport_height: Number(window.innerHeight) || 0 })";

/// One installed window listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerRegistration {
    id: u64,
    event: &'static str,
}

impl ListenerRegistration {
    /// Reserves a fresh id for a listener on `event`
    pub fn next(event: &'static str) -> Self {
        Self {
            id: NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed),
            event,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Script that installs the listener and forwards `payload` for every event.
    /// It never resolves so the eval channel stays open for `dioxus.send`.
    pub fn register_script(&self, payload: &str) -> String {
        format!(
            r#"
              const registry = (window.__{prefix}_listeners = window.__{prefix}_listeners || {{}});
              const handler = (event) => dioxus.send({payload});
              registry["{id}"] = {{ event: "{event}", handler }};
              window.addEventListener("{event}", handler, {{ passive: true }});
              await new Promise(() => {{}});
            "#,
            prefix = CSS_ID_PREFIX,
            id = self.id,
            event = self.event,
            payload = payload
        )
    }

    /// Script that removes the listener again; harmless if it is already gone
    pub fn release_script(&self) -> String {
        format!(
            r#"
              const registry = window.__{prefix}_listeners || {{}};
              const entry = registry["{id}"];
              if (entry) {{
                  window.removeEventListener(entry.event, entry.handler);
                  delete registry["{id}"];
              }}
            "#,
            prefix = CSS_ID_PREFIX,
            id = self.id
        )
    }

    pub fn release(&self) {
        debug_print!("🧹 Releasing window '{}' listener #{}", self.event, self.id);
        let _ = eval(&self.release_script());
    }
}

/// Whether a receive error means the eval channel is gone for good.
/// A payload that fails to deserialize only drops that one event.
pub fn is_channel_closed(error: &EvalError) -> bool {
    !matches!(error, EvalError::Serialization(_))
}

/// Listens to `event` on the window for as long as the calling component is mounted.
/// Each event is serialized with the `payload` JS expression and handed to `on_event`.
pub fn use_window_listener<T>(
    event: &'static str,
    payload: &'static str,
    on_event: Callback<T>
) -> ListenerRegistration
    where T: DeserializeOwned + 'static
{
    let registration = use_hook(|| ListenerRegistration::next(event));

    use_future(move || async move {
        debug_print!("👂 Registering window '{}' listener #{}", event, registration.id());
        let mut channel = eval(&registration.register_script(payload));
        loop {
            match channel.recv::<T>().await {
                Ok(value) => on_event.call(value),
                Err(e) if is_channel_closed(&e) => {
                    debug_eprint!("⚠️ Window '{}' listener #{} closed: {:?}", event, registration.id(), e);
                    break;
                }
                Err(e) => {
                    debug_eprint!("⚠️ Window '{}' listener #{} skipped an event: {:?}", event, registration.id(), e);
                    continue;
                }
            }
        }
    });

    use_drop(move || registration.release());

    registration
}
