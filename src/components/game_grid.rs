//! Filtered game grid with tile cards

use leptos::prelude::*;

use arcadia_core::{filter_games, Catalog, FilterState, GameRecord};

#[component]
pub fn GameGrid(
    catalog: ReadSignal<Catalog>,
    filter: ReadSignal<FilterState>,
    loading: ReadSignal<bool>,
    load_error: ReadSignal<Option<String>>,
    on_select: Callback<String>,
    on_retry: Callback<()>,
) -> impl IntoView {
    // Derived view of the catalog under the active filter, in catalog order.
    // Recomputed wholesale on every change; no partial update at this scale.
    let visible = move || {
        let cat = catalog.get();
        let state = filter.get();
        filter_games(cat.games(), &state)
            .into_iter()
            .cloned()
            .collect::<Vec<GameRecord>>()
    };

    view! {
        <section class="game-content">
            {move || {
                let games = visible();
                if loading.get() {
                    view! { <div class="loading">"Loading games..."</div> }.into_any()
                } else if catalog.get().is_empty() && load_error.get().is_some() {
                    let detail = load_error.get().unwrap_or_default();
                    view! {
                        <div class="load-error">
                            <p>"Couldn't load the game catalog."</p>
                            <p class="load-error-detail">{detail}</p>
                            <button class="retry-btn" on:click=move |_| on_retry.run(())>
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_any()
                } else if games.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"No games found matching your search."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    let count = games.len();
                    view! {
                        <div>
                            <div class="game-grid">
                                {games
                                    .into_iter()
                                    .map(|game| view! { <GameCard game=game on_select=on_select /> })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="game-count">{format!("{} games", count)}</div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn GameCard(game: GameRecord, on_select: Callback<String>) -> impl IntoView {
    let title = game.title.clone();
    let category = game.category.clone();
    let thumbnail = game.thumbnail.clone();
    let id_for_click = game.id.clone();

    view! {
        <div class="game-card" on:click=move |_| on_select.run(id_for_click.clone())>
            <div class="game-cover">
                <img
                    src=thumbnail
                    alt=title.clone()
                    class="cover-image"
                    loading="lazy"
                    referrerpolicy="no-referrer"
                />
            </div>
            <div class="game-info">
                <h3 class="game-title">{title}</h3>
                <p class="game-category">{category}</p>
            </div>
        </div>
    }
}
