// File: src/store.rs
use crate::model::adapter::flatten;
use crate::model::item::{CreationRecord, Section};
use anyhow::Result;
use std::io::Write;

/// Sink for creation records. Implementations persist records in the
/// order they are given; the caller decides what an empty batch means.
pub trait TaskStore {
    fn create(&mut self, record: CreationRecord) -> Result<()>;
}

/// In-memory sink, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub records: Vec<CreationRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for MemoryStore {
    fn create(&mut self, record: CreationRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }
}

/// Writes one JSON object per line, in the shape the record consumer
/// accepts.
pub struct JsonLinesStore<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesStore<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TaskStore for JsonLinesStore<W> {
    fn create(&mut self, record: CreationRecord) -> Result<()> {
        let line = serde_json::to_string(&record)?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

/// Submits every task of every section, in display order. Returns the
/// number of records created.
pub fn submit_sections(store: &mut dyn TaskStore, sections: &[Section]) -> Result<usize> {
    let tasks = flatten(sections);
    for task in &tasks {
        store.create(task.to_record())?;
    }
    log::info!("Created {} task record(s)", tasks.len());
    Ok(tasks.len())
}
