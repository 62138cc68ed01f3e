//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Builder for one record of Movable Type export text
pub struct RecordBuilder {
    fields: Vec<(String, String)>,
    body: Vec<String>,
    extended_body: Vec<String>,
    excerpt: Vec<String>,
}

impl RecordBuilder {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new(), body: Vec::new(), extended_body: Vec::new(), excerpt: Vec::new() }
    }

    /// Add an arbitrary `KEY: value` metadata line
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }

    pub fn author(self, value: &str) -> Self {
        self.field("AUTHOR", value)
    }

    pub fn title(self, value: &str) -> Self {
        self.field("TITLE", value)
    }

    pub fn status(self, value: &str) -> Self {
        self.field("STATUS", value)
    }

    pub fn allow_comments(self, value: &str) -> Self {
        self.field("ALLOW COMMENTS", value)
    }

    pub fn allow_pings(self, value: &str) -> Self {
        self.field("ALLOW PINGS", value)
    }

    pub fn date(self, value: &str) -> Self {
        self.field("DATE", value)
    }

    pub fn category(self, value: &str) -> Self {
        self.field("CATEGORY", value)
    }

    /// Add a line to the BODY block
    pub fn body_line(mut self, line: &str) -> Self {
        self.body.push(line.to_string());
        self
    }

    /// Add a line to the EXTENDED BODY block
    pub fn extended_body_line(mut self, line: &str) -> Self {
        self.extended_body.push(line.to_string());
        self
    }

    /// Add a line to the EXCERPT block
    pub fn excerpt_line(mut self, line: &str) -> Self {
        self.excerpt.push(line.to_string());
        self
    }

    /// Render the record, including its closing terminator
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        for (key, value) in &self.fields {
            text.push_str(key);
            text.push_str(": ");
            text.push_str(value);
            text.push('\n');
        }
        text.push_str("-----\n");

        for (header, lines) in [
            ("BODY:", &self.body),
            ("EXTENDED BODY:", &self.extended_body),
            ("EXCERPT:", &self.excerpt),
        ] {
            if lines.is_empty() {
                continue;
            }
            text.push_str(header);
            text.push('\n');
            for line in lines {
                text.push_str(line);
                text.push('\n');
            }
            text.push_str("-----\n");
        }

        text.push_str("--------\n");
        text
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a whole export file
pub struct ExportBuilder {
    text: String,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self { text: String::new() }
    }

    /// Append a finished record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.text.push_str(&record.to_text());
        self
    }

    /// Append raw export text verbatim (for malformed fixtures)
    pub fn with_raw(mut self, raw: &str) -> Self {
        self.text.push_str(raw);
        self
    }

    /// Render the export text
    pub fn to_text(&self) -> String {
        self.text.clone()
    }

    /// Write the export to a temp file and return its handle
    pub fn to_file(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(self.text.as_bytes()).expect("Failed to write export file");
        file.flush().expect("Failed to flush export file");
        file
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a realistic two-record export file
pub fn realistic_export() -> NamedTempFile {
    ExportBuilder::new()
        .with_record(
            RecordBuilder::new()
                .author("catatsuy")
                .title("ポエム")
                .field("BASENAME", "poem")
                .status("Publish")
                .allow_comments("1")
                .allow_pings("1")
                .field("CONVERT BREAKS", "0")
                .date("04/22/2017 20:41:58")
                .field("PRIMARY CATEGORY", "ブログ")
                .category("ポエム")
                .category("技術系")
                .body_line("<p>body</p>")
                .body_line("<p>bodybody</p>")
                .extended_body_line("<p>extended body</p>")
                .excerpt_line("ここに概要が表示されます。"),
        )
        .with_record(
            RecordBuilder::new()
                .author("catatsuy")
                .title("風邪で声を失った話")
                .field("BASENAME", "2017/04/09/194939")
                .status("Publish")
                .allow_comments("1")
                .field("CONVERT BREAKS", "0")
                .date("04/09/2017 07:49:39 PM")
                .category("日常")
                .body_line("<p>bodybodybody</p>"),
        )
        .to_file()
}
