//! Plain-text document rendering and JSON export for an [`EquationSet`].
//!
//! The renderer only sees the numbered lines; it never looks inside a
//! problem. Timestamps are passed in so output is reproducible under test.

use chrono::NaiveDateTime;
use serde_json::{json, Value};

use crate::problem_engine::models::EquationSet;

pub const DEFAULT_PER_PAGE: usize = 50;

/// Page separator between rendered pages.
pub const FORM_FEED: char = '\x0c';

/// A titled document split into pages of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub subtitle: String,
    pub pages: Vec<Vec<String>>,
}

impl Document {
    pub fn new(title: impl Into<String>, generated_at: &NaiveDateTime, lines: &[String], per_page: usize) -> Self {
        Document {
            title: title.into(),
            subtitle: subtitle(generated_at),
            pages: paginate(lines, per_page),
        }
    }

    /// The worksheet: every problem line.
    pub fn problems(set: &EquationSet, generated_at: &NaiveDateTime, per_page: usize) -> Self {
        let title = format!("{} Pre-Algebra Practice Equations", format_count(set.len()));
        Document::new(title, generated_at, &set.problems(), per_page)
    }

    /// The answer key, page-aligned with [`Document::problems`].
    pub fn answers(set: &EquationSet, generated_at: &NaiveDateTime, per_page: usize) -> Self {
        let title = format!("Answer Key - {} Pre-Algebra Equations", format_count(set.len()));
        Document::new(title, generated_at, &set.answers(), per_page)
    }

    /// Render to text. The title block heads the first page; every page ends
    /// with a `Page i of n` footer and pages are separated by a form feed.
    pub fn render(&self) -> String {
        let total = self.pages.len();
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            if i == 0 {
                out.push_str(&self.title);
                out.push('\n');
                out.push_str(&self.subtitle);
                out.push_str("\n\n");
            } else {
                out.push(FORM_FEED);
            }
            for line in page {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(&format!("\nPage {} of {}\n", i + 1, total));
        }
        out
    }
}

/// Split `lines` into pages of at most `per_page` lines.
///
/// An empty input still yields one (empty) page so the title renders. A
/// `per_page` of zero is treated as one.
pub fn paginate(lines: &[String], per_page: usize) -> Vec<Vec<String>> {
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines.chunks(per_page.max(1)).map(<[String]>::to_vec).collect()
}

/// `10000` → `"10,000"`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `"Generated on March 05, 2024 at 02:30 PM"`.
pub fn subtitle(at: &NaiveDateTime) -> String {
    format!("Generated on {}", at.format("%B %d, %Y at %I:%M %p"))
}

/// File-name timestamp, `YYYYMMDD_HHMMSS`.
pub fn file_stamp(at: &NaiveDateTime) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// JSON export: the seed plus every record with its metadata.
pub fn to_json(set: &EquationSet, generated_at: &NaiveDateTime) -> serde_json::Result<Value> {
    let records = serde_json::to_value(&set.records)?;
    Ok(json!({
        "seed": set.seed,
        "count": set.len(),
        "generated_at": generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        "records": records,
    }))
}
