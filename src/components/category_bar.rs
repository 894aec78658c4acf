//! Category selector row derived from the catalog

use leptos::prelude::*;

use arcadia_core::{category_index, Catalog, FilterState};

#[component]
pub fn CategoryBar(
    catalog: ReadSignal<Catalog>,
    filter: ReadSignal<FilterState>,
    set_filter: WriteSignal<FilterState>,
) -> impl IntoView {
    view! {
        <div class="category-bar">
            <For
                each=move || category_index(catalog.get().games())
                key=|cat| cat.clone()
                children=move |cat: String| {
                    let cat_for_active = cat.clone();
                    let cat_for_click = cat.clone();
                    view! {
                        <button
                            class="category-btn"
                            class:active=move || filter.get().category == cat_for_active
                            on:click=move |_| {
                                let cat = cat_for_click.clone();
                                set_filter.update(|f| f.set_category(cat));
                            }
                        >
                            {cat}
                        </button>
                    }
                }
            />
        </div>
    }
}
