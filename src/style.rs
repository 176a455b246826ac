/// Indentation and line-ending style of a generated file.
///
/// Detected from the existing text before every edit so that regenerated
/// sections match whatever the file already uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub indent: String,
    pub newline: &'static str,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            newline: "\n",
        }
    }
}

impl Style {
    /// Detect the style of a declaration body.
    ///
    /// Indentation comes from the first line accepted by `is_entry`, then from
    /// the first comment line, then falls back to two spaces. The newline
    /// style is CRLF if `source` contains any CRLF.
    pub fn detect(source: &str, body: &str, is_entry: impl Fn(&str) -> bool) -> Self {
        let newline = if source.contains("\r\n") { "\r\n" } else { "\n" };

        let lines = || body.lines().filter(|line| !line.trim().is_empty());
        let indent = lines()
            .find(|line| is_entry(line.trim_start()))
            .or_else(|| lines().find(|line| line.trim_start().starts_with("//")))
            .map(leading_whitespace)
            .filter(|indent| !indent.is_empty())
            .unwrap_or("  ");

        Self {
            indent: indent.to_string(),
            newline,
        }
    }
}

fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}
