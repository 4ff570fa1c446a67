//! Root application component providing the shared table state context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::table::TablePage;
use crate::state::game::TableState;

/// Root application component.
///
/// Provides the table state signal consumed by the controls and the game
/// view, then renders the single table page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let table = RwSignal::new(TableState::default());
    provide_context(table);

    view! {
        <Title text="Big Two"/>
        <TablePage/>
    }
}
