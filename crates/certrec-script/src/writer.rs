//! Low-level script assembly: header, transaction framing, escaping.

use chrono::NaiveDateTime;

use certrec_model::CanonicalDate;

/// Provenance carried into the script header. The caller supplies the
/// timestamp so rendering stays deterministic under test.
#[derive(Debug, Clone)]
pub struct ScriptMeta {
    pub generated_at: NaiveDateTime,
    /// Intended output location, recorded as a comment only.
    pub target: String,
}

impl ScriptMeta {
    pub fn new(generated_at: NaiveDateTime, target: impl Into<String>) -> Self {
        Self {
            generated_at,
            target: target.into(),
        }
    }

    /// Meta stamped with the current local time.
    pub fn now(target: impl Into<String>) -> Self {
        Self::new(chrono::Local::now().naive_local(), target)
    }
}

/// Escapes a free-text value for embedding in a single-quoted SQL literal.
/// Single-quote doubling is the only escaping rule.
pub fn quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// `'YYYY-MM-DD'` literal, or `NULL` for an absent date.
pub fn quoted_date_or_null(date: Option<CanonicalDate>) -> String {
    match date {
        Some(date) => format!("'{date}'"),
        None => "NULL".to_string(),
    }
}

/// Accumulates one atomic batch: everything between the transaction-open
/// and transaction-close markers applies fully or not at all.
#[derive(Debug)]
pub struct ScriptWriter {
    lines: Vec<String>,
}

impl ScriptWriter {
    pub fn begin(meta: &ScriptMeta) -> Self {
        let mut writer = Self { lines: Vec::new() };
        writer.comment("Generated by certrec");
        writer.comment(&format!(
            "Date: {}",
            meta.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        writer.comment(&format!("Output target: {}", meta.target));
        writer.statement("START TRANSACTION;");
        writer.blank();
        writer
    }

    pub fn comment(&mut self, text: &str) {
        self.lines.push(format!("-- {text}"));
    }

    pub fn statement(&mut self, sql: &str) {
        self.lines.push(sql.to_string());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn commit(mut self) -> String {
        self.statement("COMMIT;");
        self.lines.join("\n")
    }
}
