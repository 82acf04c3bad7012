use crate::enums::analysis_error::AnalysisError;

/// Normalizes raw log text before it is sent anywhere.
pub struct Preprocessor {
    max_chars: usize,
}

impl Preprocessor {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    /// Splits on `\n`, `\r\n` and bare `\r`, trims every line, drops blank ones and keeps at
    /// most `max_chars` characters of the most recent content.
    pub fn normalize(&self, raw: &str) -> Result<String, AnalysisError> {
        let joined = Self::normalize_lines(raw);
        if joined.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let normalized = Self::keep_tail(&joined, self.max_chars);
        if normalized.len() < joined.len() {
            log::debug!(
                "✂️  Truncated log from {} to {} characters",
                joined.chars().count(),
                normalized.chars().count()
            );
        }

        Ok(normalized.to_string())
    }

    pub fn normalize_lines(raw: &str) -> String {
        raw.split(|c: char| c == '\n' || c == '\r')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn keep_tail(text: &str, max_chars: usize) -> &str {
        let total = text.chars().count();
        if total <= max_chars {
            return text;
        }

        let start = text
            .char_indices()
            .nth(total - max_chars)
            .map(|(index, _)| index)
            .unwrap_or(text.len());
        let tail = &text[start..];

        if text[..start].ends_with('\n') {
            return tail;
        }

        // Cut landed inside a line: drop the partial line unless it is the only one left.
        match tail.find('\n') {
            Some(pos) if pos + 1 < tail.len() => &tail[pos + 1..],
            _ => tail.trim_start(),
        }
    }
}
