use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use arcadia_core::{Catalog, FilterState, Selection};

use crate::api;
use crate::components::{CategoryBar, GameGrid, GameModal, Toolbar};

#[component]
pub fn App() -> impl IntoView {
    let theme = Theme::detect();

    // Catalog held for the session; retains its previous value if a load fails
    let (catalog, set_catalog) = signal(Catalog::default());
    // Active search text and category
    let (filter, set_filter) = signal(FilterState::default());
    // Currently presented game, if any
    let (selection, set_selection) = signal(Selection::Closed);
    // Catalog load lifecycle
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    // The modal's embed target; cleared before every modal teardown
    let iframe_ref = NodeRef::<html::Iframe>::new();

    let load_catalog = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_catalog().await {
                Ok(c) => {
                    console::log_1(&format!("Loaded catalog with {} games", c.len()).into());
                    set_catalog.set(c);
                    set_load_error.set(None);
                }
                Err(e) => {
                    console::error_1(&format!("Failed to load catalog: {}", e).into());
                    set_load_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Initial load, once per page lifetime; re-run only via the retry control
    load_catalog();

    // Reset the embed target to an empty document so the previous game's
    // audio and state cannot bleed into the next one.
    let clear_embed = move || {
        if let Some(frame) = iframe_ref.get_untracked() {
            frame.set_src("about:blank");
        }
    };

    let close_modal = move || {
        clear_embed();
        set_selection.set(selection.get_untracked().close());
    };

    let on_select = Callback::new(move |id: String| {
        let cat = catalog.get_untracked();
        match selection.get_untracked().select(cat.games(), &id) {
            Ok(next) => {
                clear_embed();
                set_selection.set(next);
            }
            Err(e) => console::warn_1(&format!("Ignoring selection: {}", e).into()),
        }
    });

    let on_close = Callback::new(move |_: ()| close_modal());

    let on_home = Callback::new(move |_: ()| {
        close_modal();
        set_filter.set(FilterState::default());
    });

    let on_retry = Callback::new(move |_: ()| load_catalog());

    view! {
        <div class=format!("app-container {}", theme.css_class())>
            <Toolbar filter=filter set_filter=set_filter on_home=on_home />
            <main class="portal-content">
                <CategoryBar catalog=catalog filter=filter set_filter=set_filter />
                <GameGrid
                    catalog=catalog
                    filter=filter
                    loading=loading
                    load_error=load_error
                    on_select=on_select
                    on_retry=on_retry
                />
            </main>
            <GameModal selection=selection on_close=on_close iframe_ref=iframe_ref />
        </div>
    }
}

/// Visual theme, applied as a class on the app root. The stylesheet owns the
/// actual look; every theme shares the same portal logic.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Midnight,
    Slate,
}

impl Theme {
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Midnight => "theme-midnight",
            Theme::Slate => "theme-slate",
        }
    }

    /// Resolve the theme from the `data-theme` attribute on `<body>`.
    pub fn detect() -> Theme {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-theme"))
            .map(|name| match name.as_str() {
                "slate" => Theme::Slate,
                _ => Theme::Midnight,
            })
            .unwrap_or(Theme::Midnight)
    }
}
