use ratatui::Frame;

use crate::router::RouteMode;
use crate::ui::app::App;
use crate::ui::collection::{render_search, render_table};
use crate::ui::layout::layout_regions;
use crate::ui::remove::render_remove_dialog;
use crate::ui::upsert::render_form_dialog;
use crate::ui::{footer, header};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header_area, search_area, body_area, footer_area) = layout_regions(frame.area());

    header::render(frame, header_area, app);
    render_search(frame, search_area, app.filter(), app.is_search_focused());

    let view = app.view();
    render_table(frame, body_area, &view, app.table_ui(), app.tick());
    footer::render(frame, footer_area, app);

    // Overlays are gated on the route mode alone; the form state only
    // supplies the buffers.
    match view.mode() {
        RouteMode::Insert | RouteMode::Update => {
            render_form_dialog(frame, app.form(), app.collection());
        }
        RouteMode::Remove => render_remove_dialog(frame, &view),
        RouteMode::List => {}
    }
}
