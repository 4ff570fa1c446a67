//! The two game controls: start game and reset.
//!
//! Each click spawns one independent request task — no retries, timeouts,
//! or sequencing. Overlapping clicks race freely; whichever response
//! resolves last overwrites the table state. Failures are logged to the
//! console and the displayed state is left unchanged.

use leptos::prelude::*;

use crate::net::api;
use crate::state::game::TableState;

/// Start-game and reset buttons above the display region.
#[component]
pub fn Controls() -> impl IntoView {
    let table = expect_context::<RwSignal<TableState>>();

    let on_start = move |_| {
        leptos::task::spawn_local(async move {
            match api::start_game().await {
                Ok(snapshot) => table.update(|t| t.apply(snapshot)),
                Err(e) => log::error!("start_game failed: {e}"),
            }
        });
    };

    let on_reset = move |_| {
        leptos::task::spawn_local(async move {
            match api::reset().await {
                Ok(snapshot) => table.update(|t| t.apply(snapshot)),
                Err(e) => log::error!("reset failed: {e}"),
            }
        });
    };

    view! {
        <div class="controls">
            <button class="btn btn--primary" on:click=on_start>
                "Start Game"
            </button>
            <button class="btn" on:click=on_reset>
                "Reset"
            </button>
        </div>
    }
}
