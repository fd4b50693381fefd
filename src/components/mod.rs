//! Reusable view components shared across pages.

pub mod chat_widget;
pub mod form_field;
pub mod nav_menu;
pub mod page_error;
