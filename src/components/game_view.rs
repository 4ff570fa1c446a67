//! Display region rendering the current game snapshot.

use leptos::prelude::*;

use crate::state::game::{DisplayBlock, TableState, display_blocks};

/// The display region below the controls.
///
/// Rebuilds its block list from scratch whenever the snapshot changes, so
/// old content is always discarded before new content appears. Before the
/// first successful response there is no snapshot and the region is empty.
#[component]
pub fn GameView() -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();

    view! {
        <div class="game-view">
            {move || {
                table
                    .get()
                    .snapshot
                    .as_ref()
                    .map_or_else(Vec::new, display_blocks)
                    .into_iter()
                    .map(|block| match block {
                        DisplayBlock::Message(text) => {
                            view! { <div class="game-view__message">{text}</div> }.into_any()
                        }
                        DisplayBlock::Player(line) => {
                            view! { <div class="game-view__player">{line}</div> }.into_any()
                        }
                        DisplayBlock::LastPlayedCard(line) => {
                            view! { <div class="game-view__last-card">{line}</div> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
