use egui::{Button, ComboBox, Response, RichText, TextEdit, Ui};
use log::debug;
use userview_business::{
    DerivedView, DerivedViewCompute, PAGE_SIZE_CHOICES, UsersCompute, ViewAction, ViewParams,
    ViewParamsState, apply_view_action, reconcile_page,
};
use userview_states::StateCtx;

use super::pagination::render_pagination;
use super::table::render_users_table;
use crate::utils::colors::{COLOR_AMBER, COLOR_GRAY, COLOR_GREEN};

const SEARCH_HINT: &str = "Search name or email";
const SEARCH_WIDTH: f32 = 260.0;

/// Search box, page-size selector, status line, table and pagination controls.
///
/// Inputs collected during the frame are applied once rendering is done, so the whole frame
/// is drawn from one set of parameters.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    reconcile_page(state_ctx);

    let params = state_ctx.state::<ViewParamsState>().params.clone();
    let empty_view = DerivedView::default();
    let view = state_ctx
        .cached::<DerivedViewCompute>()
        .map_or(&empty_view, |compute| &compute.view);
    let users = state_ctx.cached::<UsersCompute>();

    let mut actions = Vec::new();

    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                if let Some(action) = render_search(ui, &params.query) {
                    actions.push(action);
                }
                if ui
                    .add_enabled(params != ViewParams::default(), Button::new("Reset"))
                    .on_hover_text("Clear the search, sort and page size")
                    .clicked()
                {
                    actions.push(ViewAction::Reset);
                }
                ui.add_space(12.0);
                if let Some(action) = render_page_size(ui, &params) {
                    actions.push(action);
                }
            });

            ui.add_space(4.0);
            render_status(ui, users, view, &params);
            ui.add_space(4.0);

            if view.page.is_empty() {
                ui.label("No users found");
            } else if let Some(action) = render_users_table(ui, &view.page, &params) {
                actions.push(action);
            }

            ui.add_space(8.0);
            if let Some(action) = render_pagination(ui, &params, view.total_pages) {
                actions.push(action);
            }
        })
        .response;

    for action in actions {
        debug!("users_panel: {action:?}");
        apply_view_action(state_ctx, action);
    }

    response
}

fn render_search(ui: &mut Ui, query: &str) -> Option<ViewAction> {
    let mut text = query.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .hint_text(SEARCH_HINT)
            .desired_width(SEARCH_WIDTH),
    );
    (response.changed() && text != query).then_some(ViewAction::SetQuery(text))
}

fn render_page_size(ui: &mut Ui, params: &ViewParams) -> Option<ViewAction> {
    let mut selected = params.page_size;
    ComboBox::from_label("Rows per page")
        .selected_text(format!("{selected} per page"))
        .show_ui(ui, |ui| {
            for choice in PAGE_SIZE_CHOICES {
                ui.selectable_value(&mut selected, choice, format!("{choice} per page"));
            }
        });
    (selected != params.page_size).then_some(ViewAction::SetPageSize(selected))
}

fn render_status(
    ui: &mut Ui,
    users: Option<&UsersCompute>,
    view: &DerivedView,
    params: &ViewParams,
) {
    ui.horizontal(|ui| {
        let Some(users) = users else {
            ui.label(RichText::new("●").color(COLOR_GRAY));
            return;
        };

        if users.is_pending() {
            ui.label(RichText::new("●").color(COLOR_AMBER));
            ui.spinner();
            ui.label("Loading users...");
            return;
        }

        let color = if users.is_loaded() {
            COLOR_GREEN
        } else {
            COLOR_GRAY
        };
        ui.label(RichText::new("●").color(color));

        let total = users.records().len();
        let summary = if params.query.is_empty() {
            format!("{total} users")
        } else {
            format!("{} of {total} users match", view.filtered.len())
        };
        ui.label(summary);

        if let Some((first, last)) = view.row_range(params) {
            ui.weak(format!("showing {first}-{last}"));
        }
        if let Some(fetched_at) = users.fetched_at() {
            ui.weak(format!("fetched {}", fetched_at.format("%H:%M:%S UTC")));
        }
    });
}
