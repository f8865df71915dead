//! Entity sinks.
//!
//! The pipeline hands every committed entity to an [`EntitySink`]. The
//! persistent knowledge base sits behind this trait; the crate ships a
//! JSON-lines writer for the command line and an in-memory collector.

use std::io::Write;

use thiserror::Error;

use crate::core::entity::Entity;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write entity: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize entity: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for committed entities
pub trait EntitySink {
    /// Store one entity.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the entity cannot be written.
    fn store(&mut self, entity: &Entity) -> Result<(), SinkError>;

    /// Flush buffered output. The default does nothing.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Io` if flushing fails.
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Writes one JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of entities written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EntitySink for JsonLinesSink<W> {
    fn store(&mut self, entity: &Entity) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, entity)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects entities in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub entities: Vec<Entity>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities of one class, in store order
    pub fn of_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities.iter().filter(move |e| e.class_name() == class)
    }
}

impl EntitySink for MemorySink {
    fn store(&mut self, entity: &Entity) -> Result<(), SinkError> {
        self.entities.push(entity.clone());
        Ok(())
    }
}
