//! UI Components
//!
//! Board columns and the cards inside them.

mod create_todo_button;
mod lane_column;
mod move_menu;
mod todo_card;

pub use create_todo_button::CreateTodoButton;
pub use lane_column::LaneColumn;
pub use move_menu::MoveMenu;
pub use todo_card::TodoCard;
