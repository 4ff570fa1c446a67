//! Table page: heading, the two game controls, and the display region.

use leptos::prelude::*;

use crate::components::controls::Controls;
use crate::components::game_view::GameView;

/// The single page of the client.
#[component]
pub fn TablePage() -> impl IntoView {
    view! {
        <div class="table-page">
            <header class="table-page__header">
                <h1>"Big Two"</h1>
            </header>
            <Controls/>
            <GameView/>
        </div>
    }
}
