use egui::{Label, Ui};

use crate::widgets::users::highlight::highlight_job;

#[inline]
pub fn render_plain_cell(ui: &mut Ui, text: &str) {
    ui.add(Label::new(text).truncate());
}

#[inline]
pub fn render_highlighted_cell(ui: &mut Ui, text: &str, query: &str) {
    let job = highlight_job(ui.style(), text, query);
    ui.add(Label::new(job).truncate());
}
