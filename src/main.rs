#![allow(clippy::needless_return)]

#[cfg(feature = "ui")]
mod ui;

#[cfg(feature = "ui")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "ui")]
use slint::ComponentHandle;

#[cfg(feature = "ui")]
use ui::{
    AppState, AppWindow, on_check_all, on_copy_output, on_filter_changed, on_refresh_and_copy,
    on_refresh_text, on_refresh_tree, on_toggle_check, on_toggle_expand, on_uncheck_all,
};

#[cfg(feature = "ui")]
fn main() -> anyhow::Result<()> {
    use projdump::core::{DEFAULT_EXT_FILTER, current_exe_name, project_root};

    let app = AppWindow::new()?;

    app.set_app_version(env!("CARGO_PKG_VERSION").into());
    app.set_ext_filter(DEFAULT_EXT_FILTER.into());
    app.set_tree_model(slint::ModelRc::new(slint::VecModel::<ui::Row>::default()));
    app.set_output_text("".into());
    app.set_output_stats("0 chars • 0 tokens".into());
    app.set_last_refresh("Last refresh: N/A".into());
    app.set_show_copy_toast(false);
    app.set_copy_toast_text("".into());

    let state = Rc::new(RefCell::new(AppState {
        base_dir: project_root(),
        self_name: current_exe_name(),
        ..Default::default()
    }));

    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_refresh_tree(move || {
            if let Some(app) = app_weak.upgrade() {
                on_refresh_tree(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_filter_changed(move || {
            if let Some(app) = app_weak.upgrade() {
                on_filter_changed(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_toggle_expand(move |idx| {
            if let Some(app) = app_weak.upgrade() {
                on_toggle_expand(&app, &state, idx as usize);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_toggle_check(move |idx| {
            if let Some(app) = app_weak.upgrade() {
                on_toggle_check(&app, &state, idx as usize);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_check_all(move || {
            if let Some(app) = app_weak.upgrade() {
                on_check_all(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_uncheck_all(move || {
            if let Some(app) = app_weak.upgrade() {
                on_uncheck_all(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_refresh_text(move || {
            if let Some(app) = app_weak.upgrade() {
                on_refresh_text(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_copy_output(move || {
            if let Some(app) = app_weak.upgrade() {
                on_copy_output(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_refresh_and_copy(move || {
            if let Some(app) = app_weak.upgrade() {
                on_refresh_and_copy(&app, &state);
            }
        });
    }

    // Populate the tree before the window shows.
    on_refresh_tree(&app, &state);

    app.run()?;
    Ok(())
}

#[cfg(not(feature = "ui"))]
fn main() -> anyhow::Result<()> {
    eprintln!(
        "Built without the `ui` feature; nothing to run. \
Enable it with `--features ui`, or just run tests with `--no-default-features`."
    );
    Ok(())
}
