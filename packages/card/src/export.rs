use store::CardRecord;

/// Download name of the live preview.
pub const PREVIEW_FILE_NAME: &str = "student-id-card.png";

/// `{name}_{rollNumber}_id-card.png` for a card from the archive.
pub fn archived_file_name(record: &CardRecord) -> String {
    format!("{}_{}_id-card.png", record.name, record.roll_number)
}

/// Make a download name safe to join onto a directory.
///
/// Path separators and other characters most filesystems reject become `-`.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        PREVIEW_FILE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
