use leptos::prelude::*;

use arcadia_core::FilterState;

#[component]
pub fn Toolbar(
    filter: ReadSignal<FilterState>,
    set_filter: WriteSignal<FilterState>,
    on_home: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="toolbar">
            <div class="toolbar-left" on:click=move |_| on_home.run(()) title="Home">
                <span class="app-logo" aria-hidden="true"></span>
                <h1 class="app-title">"Arcadia"</h1>
            </div>
            <div class="toolbar-center">
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search games..."
                        prop:value=move || filter.get().query
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_filter.update(|f| f.set_query(value));
                        }
                    />
                    <Show when=move || !filter.get().query.is_empty()>
                        <button
                            class="search-clear"
                            on:click=move |_| set_filter.update(|f| f.set_query(String::new()))
                            title="Clear search"
                        >
                            "\u{00d7}"
                        </button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
