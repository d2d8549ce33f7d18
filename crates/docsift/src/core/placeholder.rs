//! Bracketed diagnostic strings returned in place of unusable text.

/// `[<name> content parsed empty]`
pub fn parsed_empty(file_name: &str) -> String {
    format!("[{} content parsed empty]", file_name)
}

/// `[<name> - unsupported format]`
pub fn unsupported(file_name: &str) -> String {
    format!("[{} - unsupported format]", file_name)
}

/// `[<name> - <label> parse failed: <reason>]`
pub fn parse_failed(file_name: &str, label: &str, reason: &str) -> String {
    format!("[{} - {} parse failed: {}]", file_name, label, reason)
}
