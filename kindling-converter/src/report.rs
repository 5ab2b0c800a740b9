//! Per-run conversion summary

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::event::OutputEvent;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionReport {
    pub total_events: u64,
    pub converted_events: u64,
    pub dropped_events: u64,
    /// Converted events that carry at least one builder issue.
    pub degraded_events: u64,
    pub category_breakdown: BTreeMap<String, u64>,
    pub first_event: Option<DateTime<Utc>>,
    pub last_event: Option<DateTime<Utc>>,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &OutputEvent) {
        self.total_events += 1;
        self.converted_events += 1;
        if event.issues() > 0 {
            self.degraded_events += 1;
        }
        *self
            .category_breakdown
            .entry(event.category().as_str().to_string())
            .or_insert(0) += 1;

        let at = event.datetime();
        if self.first_event.map_or(true, |first| at < first) {
            self.first_event = Some(at);
        }
        if self.last_event.map_or(true, |last| at > last) {
            self.last_event = Some(at);
        }
    }

    pub fn record_dropped(&mut self) {
        self.total_events += 1;
        self.dropped_events += 1;
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} event(s): {} converted, {} dropped, {} degraded",
            self.total_events, self.converted_events, self.dropped_events, self.degraded_events
        );
        if let (Some(first), Some(last)) = (self.first_event, self.last_event) {
            line.push_str(&format!(
                " [{} .. {}]",
                first.to_rfc3339(),
                last.to_rfc3339()
            ));
        }
        line
    }
}
