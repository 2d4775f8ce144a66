// This module is only used when the `ui` feature is enabled.
slint::include_modules!();

pub mod handlers;
pub mod state;

pub use handlers::{
    on_check_all, on_copy_output, on_filter_changed, on_refresh_and_copy, on_refresh_text,
    on_refresh_tree, on_toggle_check, on_toggle_expand, on_uncheck_all,
};
pub use state::AppState;
