use super::{AppWindow, Row};
use crate::ui::state::SharedState;
use chrono::Local;
use slint::{ComponentHandle, Model, ModelRc, VecModel};
use std::path::PathBuf;

use projdump::core::{
    Node, Selection, build_dump, gather_file_paths, parse_extension_list, scan_dir_to_node,
    toggle_node_expanded,
};

const UI_OUTPUT_CHAR_LIMIT: usize = 50_000;

/* =============================== UI Actions =============================== */

pub fn on_refresh_tree(app: &AppWindow, state: &SharedState) {
    parse_filter_from_ui(app, state);
    rebuild_tree(state);
    refresh_flat_model(app, state);
    update_last_refresh(app);
}

pub fn on_filter_changed(app: &AppWindow, state: &SharedState) {
    parse_filter_from_ui(app, state);
    rebuild_tree(state);
    refresh_flat_model(app, state);
    on_refresh_text(app, state);
}

pub fn on_toggle_expand(app: &AppWindow, state: &SharedState, index: usize) {
    if let Some(row) = get_row_by_index(app, index) {
        let path = PathBuf::from(row.path.as_str());
        let toggled = {
            let mut s = state.borrow_mut();
            s.root_node
                .as_mut()
                .is_some_and(|root| toggle_node_expanded(root, &path))
        };
        if toggled {
            refresh_flat_model(app, state);
        }
    }
}

pub fn on_toggle_check(app: &AppWindow, state: &SharedState, index: usize) {
    if let Some(row) = get_row_by_index(app, index) {
        if row.is_dir {
            return;
        }
        let path = PathBuf::from(row.path.as_str());
        {
            let mut s = state.borrow_mut();
            s.selection.toggle(&path);
        }
        refresh_flat_model(app, state);
        on_refresh_text(app, state);
    }
}

pub fn on_check_all(app: &AppWindow, state: &SharedState) {
    {
        let mut s = state.borrow_mut();
        let all = s.root_node.as_ref().map(gather_file_paths);
        if let Some(all) = all {
            s.selection.clear();
            s.selection.check_all(all);
        }
    }
    refresh_flat_model(app, state);
    on_refresh_text(app, state);
}

pub fn on_uncheck_all(app: &AppWindow, state: &SharedState) {
    state.borrow_mut().selection.clear();
    refresh_flat_model(app, state);
    on_refresh_text(app, state);
}

pub fn on_refresh_text(app: &AppWindow, state: &SharedState) {
    let out = {
        let s = state.borrow();
        build_dump(&s.base_dir, &s.selection)
    };
    set_output(app, state, &out);
    update_last_refresh(app);
}

pub fn on_copy_output(app: &AppWindow, state: &SharedState) {
    let text = { state.borrow().full_output_text.clone() };

    if text.is_empty() {
        flash_toast(app, state, "Nothing to copy", 900);
        return;
    }

    let mut ok = false;
    if let Ok(mut cb) = arboard::Clipboard::new() {
        ok = cb.set_text(text).is_ok();
    }

    flash_toast(app, state, if ok { "Copied!" } else { "Copy failed" }, 1200);
}

pub fn on_refresh_and_copy(app: &AppWindow, state: &SharedState) {
    on_refresh_text(app, state);
    on_copy_output(app, state);
}

/* ================================ Helpers ================================= */

fn rebuild_tree(state: &SharedState) {
    let mut s = state.borrow_mut();
    let dir = s.base_dir.clone();
    let exts = s.exts.clone();
    let self_name = s.self_name.clone();

    let root = scan_dir_to_node(&dir, &exts, self_name.as_deref());
    let live = gather_file_paths(&root);

    // Checked paths survive a rescan only while the file still exists.
    s.selection.reconcile(&live);
    s.root_node = Some(root);
}

fn parse_filter_from_ui(app: &AppWindow, state: &SharedState) {
    let raw = app.get_ext_filter().to_string();
    state.borrow_mut().exts = parse_extension_list(&raw);
}

fn refresh_flat_model(app: &AppWindow, state: &SharedState) {
    let rows = {
        let s = state.borrow();
        if let Some(root) = &s.root_node {
            flatten_tree(root, &s.selection)
        } else {
            Vec::new()
        }
    };
    set_tree_model(app, rows);
}

fn flatten_tree(root: &Node, selection: &Selection) -> Vec<Row> {
    let mut rows = Vec::new();
    fn walk(n: &Node, selection: &Selection, level: usize, rows: &mut Vec<Row>) {
        rows.push(Row {
            path: n.path.to_string_lossy().to_string().into(),
            name: n.name.clone().into(),
            level: level as i32,
            is_dir: n.is_dir,
            expanded: if n.is_dir { n.expanded } else { false },
            checked: !n.is_dir && selection.is_checked(&n.path),
            has_children: !n.children.is_empty(),
        });
        if n.is_dir && n.expanded {
            for c in &n.children {
                walk(c, selection, level + 1, rows);
            }
        }
    }
    walk(root, selection, 0, &mut rows);
    rows
}

fn get_row_by_index(app: &AppWindow, index: usize) -> Option<Row> {
    let model = app.get_tree_model();
    if index >= model.row_count() {
        return None;
    }
    model.row_data(index)
}

fn set_tree_model(app: &AppWindow, rows: Vec<Row>) {
    let model = VecModel::from(rows);
    app.set_tree_model(ModelRc::new(model));
}

fn flash_toast(app: &AppWindow, state: &SharedState, text: &str, millis: u64) {
    app.set_copy_toast_text(text.into());
    app.set_show_copy_toast(true);

    let s = state.borrow_mut();
    let app_weak = app.as_weak();
    s.copy_toast_timer.start(
        slint::TimerMode::SingleShot,
        std::time::Duration::from_millis(millis),
        move || {
            if let Some(app) = app_weak.upgrade() {
                app.set_show_copy_toast(false);
            }
        },
    );
}

fn set_output(app: &AppWindow, state: &SharedState, s: &str) {
    {
        let mut st = state.borrow_mut();
        st.full_output_text = s.to_string();
    }

    let total_chars = s.chars().count();

    #[cfg(feature = "tokens")]
    {
        app.set_output_stats(format!("{total_chars} chars • … tokens").into());

        const MAX_TOKENIZE_BYTES: usize = 16 * 1024 * 1024;
        let text = s.to_string();
        let app_weak = app.as_weak();

        if text.len() <= MAX_TOKENIZE_BYTES {
            std::thread::spawn(move || {
                let tokens = count_tokens(&text);
                let chars = text.chars().count();
                let label = format!("{chars} chars • {tokens} tokens");
                let _ = slint::invoke_from_event_loop(move || {
                    if let Some(app) = app_weak.upgrade() {
                        app.set_output_stats(label.into());
                    }
                });
            });
        } else {
            app.set_output_stats(
                format!("{total_chars} chars • (token count skipped for large output)").into(),
            );
        }
    }

    #[cfg(not(feature = "tokens"))]
    {
        let total_tokens = count_tokens(s);
        app.set_output_stats(format!("{total_chars} chars • {total_tokens} tokens").into());
    }

    let displayed: String = if total_chars <= UI_OUTPUT_CHAR_LIMIT {
        s.to_string()
    } else {
        let footer = format!(
            "\n… [truncated: showing {} of {} chars — use “Copy All” to copy everything]\n",
            UI_OUTPUT_CHAR_LIMIT, total_chars
        );
        let keep = UI_OUTPUT_CHAR_LIMIT.saturating_sub(footer.chars().count());
        let mut head: String = s.chars().take(keep).collect();
        head.push_str(&footer);
        head
    };

    app.set_output_text(displayed.into());
}

fn update_last_refresh(app: &AppWindow) {
    let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    app.set_last_refresh(format!("Last refresh: {}", now_str).into());
}

/* ============================ Token counting ============================ */

#[cfg(feature = "tokens")]
fn count_tokens(text: &str) -> usize {
    use std::sync::OnceLock;
    use tiktoken_rs::{CoreBPE, o200k_base};
    static BPE: OnceLock<CoreBPE> = OnceLock::new();
    let bpe = BPE.get_or_init(|| o200k_base().expect("failed to load o200k_base BPE"));
    bpe.encode_with_special_tokens(text).len()
}

#[cfg(not(feature = "tokens"))]
fn count_tokens(text: &str) -> usize {
    text.split_whitespace().filter(|s| !s.is_empty()).count()
}
