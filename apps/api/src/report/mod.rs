// PDF export of an analysis: profile, top matches and advice.

pub mod font_metrics;
pub mod handlers;
pub mod pdf;
pub mod render;

pub use render::render_report;
