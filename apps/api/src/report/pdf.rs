//! Minimal flowing-text PDF writer on top of lopdf.
//!
//! Paragraphs are runs of styled text, greedy-wrapped with the static width tables
//! and laid out top to bottom on A4 pages; a new page starts when the next line
//! would cross the bottom margin. Text is encoded as WinAnsi (Latin-1 plus the
//! typographic punctuation at 0x80..=0x9F); anything else is written as `?`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use thiserror::Error;

use crate::report::font_metrics::{win_ansi_byte, Face};

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 56.0;
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF encoding failed: {0}")]
    Encode(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Center,
}

/// A piece of text in one face.
#[derive(Debug, Clone)]
pub struct Span {
    pub face: Face,
    pub text: String,
}

impl Span {
    pub fn regular(text: impl Into<String>) -> Self {
        Self {
            face: Face::Regular,
            text: text.into(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            face: Face::Bold,
            text: text.into(),
        }
    }
}

/// One wrapped word (or word fragment) and its face.
#[derive(Debug, Clone, PartialEq)]
struct Word {
    face: Face,
    text: String,
}

pub struct PdfWriter {
    finished: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    /// Baseline of the last written line on the current page.
    cursor_y: f32,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self {
            finished: Vec::new(),
            current: Vec::new(),
            cursor_y: PAGE_HEIGHT - MARGIN,
        }
    }

    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// Vertical gap; never starts a page.
    pub fn space(&mut self, points: f32) {
        self.cursor_y -= points;
    }

    pub fn paragraph(&mut self, spans: &[Span], size: f32, leading: f32, align: Align) {
        for line in wrap(spans, size, TEXT_WIDTH) {
            self.write_line(&line, size, leading, align);
        }
    }

    fn write_line(&mut self, line: &[Word], size: f32, leading: f32, align: Align) {
        if self.cursor_y - leading < MARGIN {
            self.finished.push(std::mem::take(&mut self.current));
            self.cursor_y = PAGE_HEIGHT - MARGIN;
        }
        self.cursor_y -= leading;

        let x = match align {
            Align::Left => MARGIN,
            Align::Center => MARGIN + (TEXT_WIDTH - line_width(line, size)).max(0.0) / 2.0,
        };

        let ops = &mut self.current;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Td",
            vec![Object::Real(x), Object::Real(self.cursor_y)],
        ));
        for (face, text) in group_by_face(line) {
            ops.push(Operation::new(
                "Tf",
                vec![Object::Name(face.resource_name().as_bytes().to_vec()), Object::Real(size)],
            ));
            ops.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(&text))],
            ));
        }
        ops.push(Operation::new("ET", vec![]));
    }

    /// Serializes every page into a single PDF document.
    pub fn finish(self) -> Result<Vec<u8>, PdfError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for face in [Face::Regular, Face::Bold] {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let mut pages = self.finished;
        pages.push(self.current);

        let mut kids = Vec::with_capacity(pages.len());
        for operations in pages {
            let content = Content { operations }.encode()?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(PAGE_WIDTH),
                    Object::Real(PAGE_HEIGHT),
                ],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

/// WinAnsi bytes for `text`: tabs become spaces, other control characters are
/// dropped, and characters the encoding lacks become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| match c as u32 {
            0x09 => Some(b' '),
            0x00..=0x1F => None,
            _ => Some(win_ansi_byte(c).unwrap_or(b'?')),
        })
        .collect()
}

/// The character as it will be rendered, for width measurement.
fn rendered_char(c: char) -> char {
    if win_ansi_byte(c).is_some() {
        c
    } else {
        '?'
    }
}

fn measure(face: Face, text: &str, size: f32) -> f32 {
    let rendered: String = text.chars().map(rendered_char).collect();
    face.metrics().measure_str(&rendered, size)
}

fn line_width(line: &[Word], size: f32) -> f32 {
    let words: f32 = line.iter().map(|w| measure(w.face, &w.text, size)).sum();
    let spaces = line.len().saturating_sub(1) as f32;
    words + spaces * measure(Face::Regular, " ", size)
}

/// Greedy word wrap across spans. A word wider than the whole line is split by
/// characters.
fn wrap(spans: &[Span], size: f32, max_width: f32) -> Vec<Vec<Word>> {
    let space = measure(Face::Regular, " ", size);
    let mut lines = Vec::new();
    let mut line: Vec<Word> = Vec::new();
    let mut width = 0.0_f32;

    let words = spans.iter().flat_map(|span| {
        span.text.split_whitespace().map(move |w| Word {
            face: span.face,
            text: w.to_string(),
        })
    });

    for word in words.flat_map(|w| split_long_word(w, size, max_width)) {
        let word_width = measure(word.face, &word.text, size);
        if !line.is_empty() && width + space + word_width > max_width {
            lines.push(std::mem::take(&mut line));
            width = 0.0;
        }
        width += if line.is_empty() { word_width } else { space + word_width };
        line.push(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn split_long_word(word: Word, size: f32, max_width: f32) -> Vec<Word> {
    if measure(word.face, &word.text, size) <= max_width {
        return vec![word];
    }
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.text.chars() {
        let mut candidate = current.clone();
        candidate.push(c);
        if !current.is_empty() && measure(word.face, &candidate, size) > max_width {
            pieces.push(Word {
                face: word.face,
                text: std::mem::take(&mut current),
            });
        }
        current.push(c);
    }
    if !current.is_empty() {
        pieces.push(Word {
            face: word.face,
            text: current,
        });
    }
    pieces
}

/// Joins consecutive same-face words with spaces; the space before a face change
/// stays with the earlier run.
fn group_by_face(line: &[Word]) -> Vec<(Face, String)> {
    let mut runs: Vec<(Face, String)> = Vec::new();
    for (i, word) in line.iter().enumerate() {
        let text = if i + 1 < line.len() {
            format!("{} ", word.text)
        } else {
            word.text.clone()
        };
        match runs.last_mut() {
            Some((face, run)) if *face == word.face => run.push_str(&text),
            _ => runs.push((word.face, text)),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &[Word]) -> Vec<&str> {
        line.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_encode_win_ansi_replaces_outside_range() {
        assert_eq!(encode_win_ansi("Café ✨ naïve"), b"Caf\xe9 ? na\xefve".to_vec());
        assert_eq!(encode_win_ansi("a\tb\nc"), b"a bc".to_vec());
        assert_eq!(encode_win_ansi("(x)"), b"(x)".to_vec());
    }

    #[test]
    fn test_typographic_punctuation_keeps_its_bytes() {
        assert_eq!(
            encode_win_ansi("“Ship it” – €5 • done…"),
            b"\x93Ship it\x94 \x96 \x805 \x95 done\x85".to_vec()
        );
    }

    #[test]
    fn test_em_dash_is_measured_as_em_dash() {
        // 1000 units at 10pt, not the width of '?'
        assert!((measure(Face::Regular, "—", 10.0) - 10.0).abs() < 1e-4);
        assert!((measure(Face::Regular, "✨", 10.0) - measure(Face::Regular, "?", 10.0)).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_fits_each_line() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(20);
        let lines = wrap(&[Span::regular(text)], 10.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line_width(line, 10.0) <= 200.0 + 1e-3);
        }
        let total: usize = lines.iter().map(Vec::len).sum();
        assert_eq!(total, 9 * 20);
    }

    #[test]
    fn test_wrap_is_greedy() {
        // "aaa" = 3 × 556 = 1668 units → 16.68pt at 10pt; space = 2.78pt
        let lines = wrap(&[Span::regular("aaa aaa aaa")], 10.0, 37.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(texts(&lines[0]), vec!["aaa", "aaa"]);
        assert_eq!(texts(&lines[1]), vec!["aaa"]);
    }

    #[test]
    fn test_long_word_is_split() {
        let url = "https://example.com/".repeat(20);
        let lines = wrap(&[Span::regular(url.clone())], 10.0, 100.0);
        assert!(lines.len() > 1);
        let rejoined: String = lines.iter().flat_map(|l| l.iter().map(|w| w.text.as_str())).collect();
        assert_eq!(rejoined, url);
    }

    #[test]
    fn test_group_by_face_keeps_spacing() {
        let line = wrap(&[Span::bold("Name:"), Span::regular("Jane Doe")], 10.0, 400.0);
        let runs = group_by_face(&line[0]);
        assert_eq!(
            runs,
            vec![
                (Face::Bold, "Name: ".to_string()),
                (Face::Regular, "Jane Doe".to_string())
            ]
        );
    }

    #[test]
    fn test_page_breaks_when_full() {
        let mut writer = PdfWriter::new();
        for i in 0..200 {
            writer.paragraph(&[Span::regular(format!("line {i}"))], 10.0, 12.0, Align::Left);
        }
        // (842 - 2 × 56) / 12 = 60 lines per page
        assert_eq!(writer.page_count(), 4);
        let bytes = writer.finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 4);
    }
}
