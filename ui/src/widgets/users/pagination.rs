use egui::{Button, Ui};
use userview_business::{ViewAction, ViewParams};

/// Renders `Prev`, one button per page, `Next` and a "Page X of Y" label.
///
/// Returns the action for whichever control was clicked this frame.
pub fn render_pagination(
    ui: &mut Ui,
    params: &ViewParams,
    total_pages: usize,
) -> Option<ViewAction> {
    let current = params.page_index.get();
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.add_enabled(current > 1, Button::new("Prev")).clicked() {
            action = Some(ViewAction::PrevPage);
        }

        for page in 1..=total_pages {
            if ui
                .selectable_label(page == current, page.to_string())
                .clicked()
            {
                action = Some(ViewAction::GoToPage(page));
            }
        }

        if ui
            .add_enabled(current < total_pages, Button::new("Next"))
            .clicked()
        {
            action = Some(ViewAction::NextPage);
        }

        let shown = if total_pages == 0 { 0 } else { current };
        ui.label(format!("Page {shown} of {total_pages}"));
    });

    action
}
