pub mod celebration_pane;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod metrics_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use celebration_pane::render_celebration_pane;
use header::render_header;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use metrics_pane::render_metrics;
use ratatui::{widgets::Block, Frame};
use styles::default_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, app.is_celebrating());

    // Paint the page background for the active theme
    f.render_widget(Block::default().style(default_style(app.theme)), size);

    render_keybindings(f, layout.keybindings_area, app.theme);
    render_header(f, app, layout.header_area);

    if let Some(celebration_area) = layout.celebration_area {
        render_celebration_pane(f, app, celebration_area);
    }

    render_metrics(f, app, &layout.metric_areas);
    render_list_pane(f, app, layout.list_area);

    // Render prompt if active
    if app.ui_mode != UiMode::Normal {
        render_input_form(f, app, size);
    }
}
