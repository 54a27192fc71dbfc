//! Lane Notes App
//!
//! Main application component with three-lane layout.

use leptos::prelude::*;
use todo_store::{Lane, StoreConfig};

use crate::components::LaneColumn;
use crate::context::BoardContext;

#[component]
pub fn App() -> impl IntoView {
    let board = BoardContext::open(StoreConfig::default());
    log::info!("[APP] Board opened with {} todos", board.todos.get_untracked().len());

    // Provide context to all children
    provide_context(board);

    view! {
        <div class="global-container">
            <div>
                <h2>"To-do List"</h2>
                <p>"Click on the todo to edit"</p>
            </div>
            {Lane::ALL.into_iter().map(|lane| view! { <LaneColumn lane=lane /> }).collect_view()}
        </div>
    }
}
