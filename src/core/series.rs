//! Canonical, time-ordered release sequence shared by every downstream stage.

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, RawBatch};
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct EventSeries {
    events: Vec<Event>,
}

impl EventSeries {
    /// Flatten raw batches (batch order, then position) and sort by timestamp.
    pub fn from_batches(batches: &[RawBatch]) -> AppResult<Self> {
        let events = batches
            .iter()
            .flat_map(|b| b.records.iter())
            .map(Event::from_raw)
            .collect::<AppResult<Vec<_>>>()?;

        Self::from_events(events)
    }

    /// Sort already-parsed events. `sort_by_key` is stable, so equal
    /// timestamps keep their insertion order.
    pub fn from_events(mut events: Vec<Event>) -> AppResult<Self> {
        if events.is_empty() {
            return Err(AppError::EmptySeries);
        }

        events.sort_by_key(|e| e.timestamp);
        tracing::debug!(events = events.len(), "release series built");

        Ok(Self { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false for a constructed series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn first(&self) -> &Event {
        &self.events[0]
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Paid-tier events, in series order.
    pub fn paid(&self) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_paid()).collect()
    }

    /// Free-tier events, in series order.
    pub fn free(&self) -> Vec<&Event> {
        self.events.iter().filter(|e| !e.is_paid()).collect()
    }
}

impl Index<usize> for EventSeries {
    type Output = Event;

    fn index(&self, index: usize) -> &Event {
        &self.events[index]
    }
}

impl<'a> IntoIterator for &'a EventSeries {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
