// File: src/model/parser.rs
use crate::config::ParserConfig;
use crate::model::classifier::{Line, classify};
use crate::model::extract::parse_task_line;
use crate::model::item::Section;

/// Title of the synthetic section holding tasks that appear before any
/// heading.
pub const DEFAULT_SECTION_TITLE: &str = "AI提案TODO";

/// Parses a markdown TODO list with the default configuration.
pub fn parse_sections(content: &str) -> Vec<Section> {
    parse_sections_with(content, &ParserConfig::default())
}

/// Single pass over the input: a heading opens a new section, a task
/// line appends to the current one (creating the default section when
/// none exists yet). Lines that yield no task are skipped and never
/// open a section by themselves.
pub fn parse_sections_with(content: &str, config: &ParserConfig) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match classify(line) {
            Line::Heading(title) => sections.push(Section::new(title)),
            Line::ListItem(text) | Line::Plain(text) => {
                let Some(task) = parse_task_line(&text, config.default_duration_hours) else {
                    continue;
                };
                if sections.is_empty() {
                    sections.push(Section::new(config.default_section_title.clone()));
                }
                if let Some(current) = sections.last_mut() {
                    current.push(task);
                }
            }
        }
    }
    sections
}
