//! Move Menu Component
//!
//! Hover menu on a todo card: one button per other lane, plus delete.

use leptos::prelude::*;
use todo_store::Lane;

/// Hover menu for a card in `lane`
///
/// # Arguments
/// * `visible` - whether the pointer is over the card or the menu
/// * `on_move` - called with the destination lane
/// * `on_delete` - called when the delete button is clicked
#[component]
pub fn MoveMenu(
    lane: Lane,
    visible: ReadSignal<bool>,
    set_visible: WriteSignal<bool>,
    #[prop(into)] on_move: Callback<Lane>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="todo-menu"
            style:display=move || if visible.get() { "flex" } else { "none" }
            on:mouseenter=move |_| set_visible.set(true)
            on:mouseleave=move |_| set_visible.set(false)
        >
            {lane.others().map(move |target| view! {
                <div class="menu-option">
                    <button
                        class="move-btn"
                        title=format!("Move to {}", target.title())
                        on:click=move |_| on_move.run(target)
                    >
                        <span class=format!("lane-dot {}", target.as_str())></span>
                    </button>
                </div>
            }).collect_view()}
            <div class="menu-option">
                <button
                    class="delete-btn"
                    title="Delete todo"
                    on:click=move |_| on_delete.run(())
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
