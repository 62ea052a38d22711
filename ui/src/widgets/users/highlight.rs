use egui::text::{LayoutJob, TextFormat};
use egui::{Style, TextStyle};
use userview_business::highlight;

use crate::utils::colors::{MATCH_BG_COLOR, MATCH_TEXT_COLOR};

/// Lay out `text` with every case-insensitive occurrence of `query` on a highlight background.
pub fn highlight_job(style: &Style, text: &str, query: &str) -> LayoutJob {
    let font_id = TextStyle::Body.resolve(style);
    let text_color = style.visuals.text_color();

    let mut job = LayoutJob::default();
    for segment in highlight(text, query) {
        let format = if segment.matched {
            TextFormat {
                font_id: font_id.clone(),
                color: MATCH_TEXT_COLOR,
                background: MATCH_BG_COLOR,
                ..Default::default()
            }
        } else {
            TextFormat::simple(font_id.clone(), text_color)
        };
        job.append(&segment.text, 0.0, format);
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_sections_get_the_highlight_background() {
        let style = Style::default();
        let job = highlight_job(&style, "Bob Bobson", "bo");

        assert_eq!(job.text, "Bob Bobson");
        let backgrounds: Vec<bool> = job
            .sections
            .iter()
            .map(|section| section.format.background == MATCH_BG_COLOR)
            .collect();
        assert_eq!(backgrounds, vec![true, false, true, false]);
    }

    #[test]
    fn empty_query_is_one_plain_section() {
        let style = Style::default();
        let job = highlight_job(&style, "a@x.com", "");

        assert_eq!(job.text, "a@x.com");
        assert_eq!(job.sections.len(), 1);
        assert_ne!(job.sections[0].format.background, MATCH_BG_COLOR);
    }
}
