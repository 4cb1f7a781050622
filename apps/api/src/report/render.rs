//! Lays out the career report: title, profile, top matches, advice.

use tracing::debug;

use crate::matching::Match;
use crate::models::Profile;
use crate::report::pdf::{Align, PdfError, PdfWriter, Span};

pub const REPORT_TITLE: &str = "AI Career Advisor Report";
pub const REPORT_FILENAME: &str = "career_advisor_report.pdf";

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 10.0;
const BODY_LEADING: f32 = 13.0;

/// Renders the report as PDF bytes. `top_matches` is shown as given.
pub fn render_report(
    profile: &Profile,
    top_matches: &[Match],
    advice: &str,
) -> Result<Vec<u8>, PdfError> {
    let mut pdf = PdfWriter::new();

    pdf.paragraph(&[Span::bold(REPORT_TITLE)], TITLE_SIZE, 22.0, Align::Center);
    pdf.space(8.0);

    heading(&mut pdf, "User Profile");
    for (label, value) in profile.display_fields() {
        body(&mut pdf, vec![Span::bold(format!("{label}:")), Span::regular(value)]);
    }
    pdf.space(8.0);

    heading(&mut pdf, "Top Career Matches");
    for m in top_matches {
        body(
            &mut pdf,
            vec![
                Span::bold(m.role.as_str()),
                Span::regular(format!("- {}% match", m.percent)),
            ],
        );
        body(&mut pdf, vec![Span::regular(m.about.as_str())]);
        if !m.missing.is_empty() {
            body(
                &mut pdf,
                vec![Span::regular(format!("Missing Skills: {}", m.missing.join(", ")))],
            );
        }
        pdf.space(6.0);
    }

    heading(&mut pdf, "Personalized Advice");
    for line in advice.lines().map(str::trim).filter(|l| !l.is_empty()) {
        body(&mut pdf, vec![Span::regular(line)]);
    }

    debug!(pages = pdf.page_count(), "Report laid out");
    pdf.finish()
}

fn heading(pdf: &mut PdfWriter, text: &str) {
    pdf.space(4.0);
    pdf.paragraph(&[Span::bold(text)], HEADING_SIZE, 18.0, Align::Left);
    pdf.space(2.0);
}

fn body(pdf: &mut PdfWriter, spans: Vec<Span>) {
    pdf.paragraph(&spans, BODY_SIZE, BODY_LEADING, Align::Left);
}
