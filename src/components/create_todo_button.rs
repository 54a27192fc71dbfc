//! Create Todo Button Component
//!
//! "+ New" button at the bottom of each lane.

use leptos::prelude::*;
use todo_store::Lane;

use crate::context::use_board;

/// CSS class for a lane's create button
fn button_class(lane: Lane) -> String {
    format!("add-todo-container {}-createTodo", lane.as_str())
}

/// Appends a blank todo to `lane`; the new card grabs focus on mount
#[component]
pub fn CreateTodoButton(lane: Lane) -> impl IntoView {
    let board = use_board();

    view! {
        <button
            class=button_class(lane)
            on:click=move |_| {
                board.create(lane);
            }
        >
            <span class="add-todo-text">"+"</span>
            <span class="add-todo-text">"New"</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(Lane::InProgress), "add-todo-container in-progress-createTodo");
    }
}
