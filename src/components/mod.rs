//! UI Components
//!
//! Reusable Leptos components.

mod account_menu;
mod archive_view;
mod board_tab_bar;
mod delete_confirm_button;
mod eisenhower_matrix;
mod tag_input;
mod task_card;
mod task_dialogs;
mod task_form;
mod toaster;
mod top_navigation;

pub use account_menu::AccountMenu;
pub use archive_view::ArchiveView;
pub use board_tab_bar::BoardTabBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use eisenhower_matrix::EisenhowerMatrix;
pub use tag_input::TagInput;
pub use task_card::TaskCard;
pub use task_dialogs::{AddTaskDialog, EditTaskDialog};
pub use task_form::TaskForm;
pub use toaster::Toaster;
pub use top_navigation::TopNavigation;
