//! Static paper archive for the what-if feature.

use tracing::debug;

/// Domain keywords used to match a question against archive rows.
pub const DOMAIN_KEYWORDS: [&str; 18] = [
    "microgravity",
    "gravity",
    "space",
    "radiation",
    "astronaut",
    "bone",
    "muscle",
    "cell",
    "dna",
    "gene",
    "protein",
    "immune",
    "mars",
    "moon",
    "iss",
    "orbit",
    "cosmic",
    "solar",
];

/// Maximum number of rows included as prompt context.
pub const MAX_RELEVANT_PAPERS: usize = 3;

/// An in-memory archive of paper metadata rows, loaded once from CSV-shaped
/// text (header line + data lines). Lookups are plain case-insensitive
/// substring matching over whole rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperArchive {
    header: String,
    rows: Vec<String>,
}

impl PaperArchive {
    /// Parse an archive from CSV-shaped text. Blank lines are skipped; an
    /// empty input yields an empty archive (lookups then find nothing).
    pub fn from_csv_str(csv: &str) -> Self {
        let mut lines = csv.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().unwrap_or_default().to_string();
        let rows: Vec<String> = lines.map(str::to_string).collect();
        debug!(rows = rows.len(), "loaded paper archive");
        Self { header, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the archive holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Up to [`MAX_RELEVANT_PAPERS`] rows sharing a domain keyword with the
    /// question, or containing its first word.
    pub fn find_relevant(&self, question: &str) -> Vec<&str> {
        let question = question.to_lowercase();
        let first_word = question.split_whitespace().next().unwrap_or_default();

        self.rows
            .iter()
            .filter(|row| {
                let row = row.to_lowercase();
                DOMAIN_KEYWORDS
                    .iter()
                    .any(|kw| question.contains(kw) && row.contains(kw))
                    || (!first_word.is_empty() && row.contains(first_word))
            })
            .take(MAX_RELEVANT_PAPERS)
            .map(String::as_str)
            .collect()
    }

    /// The context block injected into the what-if prompt: matching rows
    /// under the header, or an explicit no-match note.
    pub fn context_block(&self, question: &str) -> String {
        let relevant = self.find_relevant(question);
        if relevant.is_empty() {
            "\n\n(No matching papers found, provide expert analysis)".to_string()
        } else {
            format!("\n\nRelevant papers:\n{}\n{}", self.header, relevant.join("\n"))
        }
    }
}
