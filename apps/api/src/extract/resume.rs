//! Résumé extraction: PDF bytes → plain text → a default profile with detected skills.
//!
//! Best-effort throughout: a PDF the parser cannot read (or that makes it panic)
//! yields empty text and a warning, never an error response.

use bytes::Bytes;
use tracing::{info, warn};

use crate::models::Profile;
use crate::skills::SkillsDatabase;

pub const UNKNOWN_NAME: &str = "Unknown";
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Outcome of reading one uploaded résumé.
#[derive(Debug, Clone)]
pub struct ResumeExtraction {
    pub text: String,
    pub warnings: Vec<String>,
}

/// Whether an upload looks like a PDF, by file name or magic bytes.
pub fn is_pdf(file_name: Option<&str>, content_type: Option<&str>, bytes: &[u8]) -> bool {
    let by_name = file_name
        .map(|n| n.to_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    let by_type = content_type == Some("application/pdf");
    (by_name || by_type) && bytes.starts_with(PDF_MAGIC)
}

/// Concatenated page text of a PDF. Runs the parser on the blocking pool.
pub async fn extract_pdf_text(bytes: Bytes) -> ResumeExtraction {
    let size = bytes.len();
    let result = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match result {
        Ok(Ok(text)) => {
            info!(bytes = size, chars = text.len(), "Extracted résumé text");
            ResumeExtraction {
                text,
                warnings: Vec::new(),
            }
        }
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            unreadable(format!("Could not read text from the PDF: {e}"))
        }
        Err(join_err) => {
            warn!("PDF parser aborted: {join_err}");
            unreadable("Could not read text from the PDF.".to_string())
        }
    }
}

fn unreadable(warning: String) -> ResumeExtraction {
    ResumeExtraction {
        text: String::new(),
        warnings: vec![warning],
    }
}

/// Builds the profile a résumé implies: its first line as the name, detected skills,
/// defaults for everything else.
pub fn parse_resume_profile(text: &str, skills_db: &SkillsDatabase) -> Profile {
    let name = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(UNKNOWN_NAME);
    Profile::with_skills(name, skills_db.detect_skills(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::pdf::{Align, PdfWriter, Span};

    fn db() -> SkillsDatabase {
        SkillsDatabase::from_skills(["python", "machine learning", "sql", "c++"]).unwrap()
    }

    #[test]
    fn test_profile_from_resume_text() {
        let text = "\n  Jane Doe  \nSoftware engineer. Python, C++ and Machine-Learning.\n";
        let profile = parse_resume_profile(text, &db());
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.skills, vec!["python", "machine learning", "c++"]);
        assert_eq!(profile.age, 25);
        assert_eq!(profile.career_goal, "Not specified");
    }

    #[test]
    fn test_empty_text_is_unknown() {
        let profile = parse_resume_profile("", &db());
        assert_eq!(profile.name, UNKNOWN_NAME);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_is_pdf_requires_magic_bytes() {
        assert!(is_pdf(Some("cv.PDF"), None, b"%PDF-1.7\n"));
        assert!(is_pdf(None, Some("application/pdf"), b"%PDF-1.4"));
        assert!(!is_pdf(Some("cv.pdf"), None, b"hello"));
        assert!(!is_pdf(Some("cv.docx"), Some("application/msword"), b"%PDF-1.4"));
    }

    #[tokio::test]
    async fn test_garbage_pdf_degrades_to_empty_text() {
        let extraction = extract_pdf_text(Bytes::from_static(b"%PDF-1.4 not really a pdf")).await;
        assert!(extraction.text.is_empty());
        assert_eq!(extraction.warnings.len(), 1);
    }

    fn resume_pdf() -> Vec<u8> {
        let mut pdf = PdfWriter::new();
        pdf.paragraph(&[Span::bold("Jane Doe")], 16.0, 20.0, Align::Left);
        pdf.paragraph(
            &[Span::regular("Data analyst. Python, SQL and some Machine Learning.")],
            10.0,
            13.0,
            Align::Left,
        );
        pdf.finish().unwrap()
    }

    #[tokio::test]
    async fn test_real_pdf_yields_name_and_skills() {
        let bytes = resume_pdf();
        assert!(is_pdf(Some("jane.pdf"), Some("application/pdf"), &bytes));

        let extraction = extract_pdf_text(Bytes::from(bytes)).await;
        assert!(extraction.warnings.is_empty(), "{:?}", extraction.warnings);

        let profile = parse_resume_profile(&extraction.text, &db());
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.skills, vec!["python", "machine learning", "sql"]);
    }
}
