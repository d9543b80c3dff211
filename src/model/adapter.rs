// File: src/model/adapter.rs
use crate::config::ParserConfig;
use crate::model::item::{CreationRecord, ParsedTask, RecordStatus, Section};
use crate::model::parser::parse_sections_with;

/// Flattens sections into one ordered task list, stamping each task with
/// the title of the section it came from (overwriting any prior value).
pub fn flatten(sections: &[Section]) -> Vec<ParsedTask> {
    let mut tasks = Vec::new();
    for section in sections {
        for task in &section.tasks {
            let mut task = task.clone();
            task.section = Some(section.title.clone());
            tasks.push(task);
        }
    }
    tasks
}

impl ParsedTask {
    /// Shapes this task into the payload the record store accepts:
    /// section prefix first, then goal suffix.
    pub fn to_record(&self) -> CreationRecord {
        let mut text = match &self.section {
            Some(section) => format!("[{}] {}", section, self.task),
            None => self.task.clone(),
        };
        if let Some(goal) = &self.goal {
            text = format!("{} (目標: {})", text, goal);
        }
        CreationRecord {
            task: text,
            study_time_hours: self.study_time_hours,
            status: RecordStatus::Pending,
        }
    }
}

/// Full pipeline: parse, flatten, adapt. Record order follows the
/// on-screen order of sections and their tasks.
pub fn creation_records(content: &str, config: &ParserConfig) -> Vec<CreationRecord> {
    flatten(&parse_sections_with(content, config))
        .iter()
        .map(ParsedTask::to_record)
        .collect()
}
