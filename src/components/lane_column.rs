//! Lane Column Component
//!
//! One of the three board columns: title, cards, create button.

use leptos::prelude::*;
use todo_store::Lane;

use crate::components::{CreateTodoButton, TodoCard};
use crate::context::use_board;

fn column_class(lane: Lane) -> String {
    format!("todos-container {}", lane.as_str())
}

/// Cards of `lane` in collection order
#[component]
pub fn LaneColumn(lane: Lane) -> impl IntoView {
    let board = use_board();

    view! {
        <div class=column_class(lane)>
            <div class="todos-container__title">{lane.title()}</div>
            <div class="todos-container__todos">
                <For
                    each=move || board.lane(lane)
                    key=|item| item.id
                    children=move |item| view! { <TodoCard item=item /> }
                />
                <CreateTodoButton lane=lane />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_class() {
        assert_eq!(column_class(Lane::InProgress), "todos-container in-progress");
    }
}
