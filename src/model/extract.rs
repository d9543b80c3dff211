// File: ./src/model/extract.rs
use crate::model::classifier::numbered_marker_len;
use crate::model::item::{ParsedTask, Priority};
use once_cell::sync::Lazy;
use regex::Regex;

// A number immediately followed by its unit. `分` is minutes; everything
// else is hours. Only the first match on a line is honored.
static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)(時間|hours?|h|分)").unwrap());
static PRIORITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"優先度[：:]\s*(高|中|低|[123])").unwrap());
// Goal text runs up to the next 、 or 。 (or end of string).
static GOAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"目標[：:]\s*([^、。]+)").unwrap());

/// Strips a leading list/number marker (`-`, `•`, `*`, `N.`) and the
/// whitespace around it.
pub fn strip_list_marker(line: &str) -> &str {
    let rest = line.trim_start();
    if let Some(stripped) = rest.strip_prefix(['-', '•', '*']) {
        return stripped.trim_start();
    }
    if let Some(len) = numbered_marker_len(rest) {
        return rest[len..].trim_start();
    }
    rest
}

fn remove_range(text: &str, start: usize, end: usize) -> String {
    format!("{}{}", &text[..start], &text[end..])
}

/// Extracts an embedded study time in hours, removing the matched
/// substring. Minutes are converted; hours pass through unchanged.
pub fn extract_duration(text: &str) -> (Option<f64>, String) {
    let Some(caps) = DURATION_RE.captures(text) else {
        return (None, text.to_string());
    };
    let (Some(whole), Some(value), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return (None, text.to_string());
    };
    // The pattern constrains the digits, but a non-finite parse must not
    // leak into the task record.
    let hours = match value.as_str().parse::<f64>() {
        Ok(n) if n.is_finite() => {
            if unit.as_str() == "分" {
                n / 60.0
            } else {
                n
            }
        }
        _ => return (None, text.to_string()),
    };
    (Some(hours), remove_range(text, whole.start(), whole.end()))
}

/// Extracts a `優先度: 高|中|低|1|2|3` marker, removing it from the text.
pub fn extract_priority(text: &str) -> (Option<Priority>, String) {
    let Some(caps) = PRIORITY_RE.captures(text) else {
        return (None, text.to_string());
    };
    let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
        return (None, text.to_string());
    };
    let priority = match value.as_str() {
        "高" | "1" => Priority::High,
        "中" | "2" => Priority::Medium,
        _ => Priority::Low,
    };
    (Some(priority), remove_range(text, whole.start(), whole.end()))
}

/// Extracts a `目標: ...` marker, removing it (label included) from the
/// text.
pub fn extract_goal(text: &str) -> (Option<String>, String) {
    let Some(caps) = GOAL_RE.captures(text) else {
        return (None, text.to_string());
    };
    let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
        return (None, text.to_string());
    };
    let goal = value.as_str().trim().to_string();
    (Some(goal), remove_range(text, whole.start(), whole.end()))
}

/// Parses one candidate task line. Extraction order is fixed (duration,
/// then priority, then goal); each step consumes its own marker before
/// the next runs. Returns `None` when nothing but markers remained.
pub fn parse_task_line(line: &str, default_duration_hours: f64) -> Option<ParsedTask> {
    let text = strip_list_marker(line);
    let (duration, text) = extract_duration(text);
    let (priority, text) = extract_priority(&text);
    let (goal, text) = extract_goal(&text);
    let task = text.trim().to_string();
    if task.is_empty() {
        return None;
    }
    Some(ParsedTask {
        task,
        study_time_hours: duration.unwrap_or(default_duration_hours),
        section: None,
        goal,
        priority,
    })
}
