// File: ./src/model/classifier.rs

/// Role of a single trimmed, non-empty input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Heading(String),
    ListItem(String),
    Plain(String),
}

/// Classifies one trimmed, non-empty line. Every such line receives
/// exactly one role.
pub fn classify(line: &str) -> Line {
    if line.starts_with('#') {
        let title = line.trim_start_matches('#').trim().to_string();
        return Line::Heading(title);
    }
    if is_list_item(line) {
        return Line::ListItem(line.to_string());
    }
    Line::Plain(line.to_string())
}

fn is_list_item(line: &str) -> bool {
    let rest = line.trim_start();
    if rest.starts_with('-') || rest.starts_with('•') || rest.starts_with('*') {
        return true;
    }
    numbered_marker_len(rest).is_some()
}

/// Byte length of a leading `N.` marker, if present.
pub(crate) fn numbered_marker_len(s: &str) -> Option<usize> {
    let digits = s.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[digits..].starts_with('.').then(|| digits + 1)
}
