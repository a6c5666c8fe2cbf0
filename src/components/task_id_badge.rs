//! Task Id Badge Component
//!
//! `#` button that reveals a task's id and copies it to the clipboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::js_message;
use crate::models::TaskId;
use crate::notify::ToastKind;
use crate::store::{store_notify, use_app_store};

#[component]
pub fn TaskIdBadge(id: TaskId) -> impl IntoView {
    let store = use_app_store();
    let (revealed, set_revealed) = signal(false);
    let label = id.to_string();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let reveal = !revealed.get_untracked();
        set_revealed.set(reveal);
        if !reveal {
            return;
        }
        match write_clipboard(id.as_str()) {
            Ok(promise) => spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        store_notify(&store, ToastKind::Success, "Task ID copied to clipboard!");
                    }
                    Err(e) => log::warn!("clipboard write rejected: {}", js_message(&e)),
                }
            }),
            Err(e) => log::warn!("clipboard unavailable: {}", js_message(&e)),
        }
    };

    view! {
        <button class="task-id-btn" title="Show task ID" on:click=on_click>
            {move || if revealed.get() { label.clone() } else { "#".to_string() }}
        </button>
    }
}

/// `navigator.clipboard.writeText(text)`
fn write_clipboard(text: &str) -> Result<js_sys::Promise, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator = js_sys::Reflect::get(&window, &JsValue::from_str("navigator"))?;
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()
}
