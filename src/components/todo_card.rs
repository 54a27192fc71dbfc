//! Todo Card Component
//!
//! Inline editor for one todo: an auto-growing textarea whose edits are
//! committed after a quiet period, plus the hover menu.

use leptos::html::Textarea;
use leptos::prelude::*;
use todo_store::{Lane, TodoItem};
use web_sys::HtmlTextAreaElement;

use crate::components::MoveMenu;
use crate::context::use_board;
use crate::debounce::DebouncedCommit;

fn card_class(lane: Lane) -> String {
    format!("todo-container {}-todo", lane.as_str())
}

fn textarea_class(lane: Lane) -> String {
    format!("todo-textarea {}-todo", lane.as_str())
}

fn height_px(scroll_height: i32) -> String {
    format!("{}px", scroll_height.max(0))
}

/// What losing focus does to the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlurAction {
    /// Commit the pending edit now
    Flush,
    /// Drop the pending edit and delete the abandoned todo
    Discard,
}

fn blur_action(draft: &str) -> BlurAction {
    if draft.is_empty() {
        BlurAction::Discard
    } else {
        BlurAction::Flush
    }
}

/// Shrink then grow the textarea to fit its text
fn fit_to_content(textarea: &HtmlTextAreaElement) {
    let style = web_sys::HtmlElement::style(textarea);
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &height_px(textarea.scroll_height()));
}

/// Editable card for a single todo
///
/// The draft lives in the card; the store only sees it once typing pauses
/// or the textarea loses focus. Leaving the textarea empty deletes the todo.
#[component]
pub fn TodoCard(item: TodoItem) -> impl IntoView {
    let board = use_board();
    let id = item.id;
    let lane = item.lane;
    let wants_focus = item.is_blank();

    let (draft, set_draft) = signal(item.content);
    let (menu_visible, set_menu_visible) = signal(false);
    let textarea_ref = NodeRef::<Textarea>::new();

    let commit = StoredValue::new_local(DebouncedCommit::new(board.debounce_ms(), move |content: String| {
        board.set_content(id, content);
    }));

    // Force focus on a freshly created card
    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            if wants_focus && board.is_last_created(id) {
                let _ = textarea.focus();
            }
        }
    });

    // Auto-resize
    Effect::new(move |_| {
        let _ = draft.get();
        if let Some(textarea) = textarea_ref.get() {
            fit_to_content(&textarea);
        }
    });

    let on_move = move |target: Lane| {
        commit.with_value(|c| c.flush());
        board.move_to(id, target);
    };

    let on_delete = move |_: ()| {
        commit.with_value(|c| c.cancel());
        board.delete(id);
    };

    view! {
        <div class=card_class(lane)>
            <textarea
                node_ref=textarea_ref
                class=textarea_class(lane)
                rows=1
                placeholder="Type something..."
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_draft.set(value.clone());
                    commit.with_value(|c| c.push(value));
                }
                on:blur=move |_| match blur_action(&draft.get_untracked()) {
                    BlurAction::Flush => commit.with_value(|c| c.flush()),
                    BlurAction::Discard => {
                        commit.with_value(|c| c.cancel());
                        board.delete(id);
                    }
                }
                on:mouseenter=move |_| set_menu_visible.set(true)
                on:mouseleave=move |_| set_menu_visible.set(false)
            ></textarea>
            <MoveMenu
                lane=lane
                visible=menu_visible
                set_visible=set_menu_visible
                on_move=on_move
                on_delete=on_delete
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(card_class(Lane::Todo), "todo-container to-do-todo");
        assert_eq!(textarea_class(Lane::Completed), "todo-textarea completed-todo");
    }

    #[test]
    fn test_blur_action() {
        assert_eq!(blur_action(""), BlurAction::Discard);
        assert_eq!(blur_action("buy milk"), BlurAction::Flush);
        // Only a truly empty draft counts as abandoned
        assert_eq!(blur_action(" "), BlurAction::Flush);
    }

    #[test]
    fn test_height_px() {
        assert_eq!(height_px(48), "48px");
        assert_eq!(height_px(-1), "0px");
    }
}
