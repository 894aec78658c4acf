//! Overlay modal that embeds the selected game in an iframe

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::console;

use arcadia_core::Selection;

#[component]
pub fn GameModal(
    selection: ReadSignal<Selection>,
    on_close: Callback<()>,
    iframe_ref: NodeRef<html::Iframe>,
) -> impl IntoView {
    // Fallback message state for embeds that fail to load
    let (embed_failed, set_embed_failed) = signal(false);

    // Close on Escape while a game is open
    window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selection.get_untracked().is_open() {
            on_close.run(());
        }
    });

    // Suppress background scrolling while a game is open; restored on every
    // exit path since this tracks the selection itself.
    Effect::new(move || {
        set_scroll_locked(selection.get().is_open());
    });

    // A new embed target starts with a clean error state
    Effect::new(move || {
        selection.track();
        set_embed_failed.set(false);
    });

    view! {
        <Show when=move || selection.get().is_open()>
            {move || {
                selection.get().game().cloned().map(|game| {
                    let title = game.title.clone();
                    let category = game.category.clone();
                    let url_for_embed = game.url.clone();
                    let url_for_tab = game.url.clone();

                    view! {
                        <div class="modal-overlay" on:click=move |_| on_close.run(())>
                            <div class="modal-panel" on:click=|e| e.stop_propagation()>
                                <div class="modal-header">
                                    <h2 class="modal-title">{title.clone()}</h2>
                                    <div class="modal-actions">
                                        <button
                                            class="modal-btn"
                                            title="Open in new tab"
                                            on:click=move |_| open_in_new_tab(&url_for_tab)
                                        >
                                            "New tab"
                                        </button>
                                        <button
                                            class="modal-btn modal-close"
                                            title="Close"
                                            on:click=move |_| on_close.run(())
                                        >
                                            "\u{00d7}"
                                        </button>
                                    </div>
                                </div>
                                <div class="modal-frame">
                                    <iframe
                                        node_ref=iframe_ref
                                        src=url_for_embed
                                        class="game-frame"
                                        title=title.clone()
                                        allowfullscreen=true
                                        allow="fullscreen"
                                        on:error=move |_| set_embed_failed.set(true)
                                    />
                                    <Show when=move || embed_failed.get()>
                                        <div class="embed-fallback">
                                            <p>"This game couldn't be loaded."</p>
                                        </div>
                                    </Show>
                                </div>
                                <div class="modal-footer">
                                    <span class="modal-category">
                                        "Category: " <span>{category}</span>
                                    </span>
                                    <span class="modal-hint">"Press ESC to close"</span>
                                    <button
                                        class="modal-btn"
                                        on:click=move |_| request_embed_fullscreen(iframe_ref)
                                    >
                                        "Fullscreen"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </Show>
    }
}

fn set_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            console::warn_1(&format!("Failed to open new tab: {:?}", e).into());
        }
    }
}

/// Best-effort fullscreen for the embedded content. Environments that only
/// expose a prefixed presentation API are tried next; everything failing is
/// a silent no-op, not an error.
fn request_embed_fullscreen(frame: NodeRef<html::Iframe>) {
    let Some(frame) = frame.get_untracked() else {
        return;
    };
    if frame.request_fullscreen().is_ok() {
        return;
    }
    for name in [
        "webkitRequestFullscreen",
        "mozRequestFullScreen",
        "msRequestFullscreen",
    ] {
        if let Ok(method) = js_sys::Reflect::get(&frame, &JsValue::from_str(name)) {
            if let Some(method) = method.dyn_ref::<js_sys::Function>() {
                let _ = method.call0(&frame);
                return;
            }
        }
    }
}
