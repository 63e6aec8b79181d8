//! JSON Event Sink
//!
//! Outputs planning events as NDJSON, one object per line.

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::domain::ports::{PlanningEvent, PlanningEventSink};
use crate::domain::rejection::Rejection;

/// Event sink that outputs NDJSON events to a writer (stdout by default)
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", event);
        let _ = writer.flush();
    }
}

fn rejection_json(rejection: &Rejection) -> serde_json::Value {
    serde_json::json!({
        "code": rejection.code(),
        "message": rejection.to_string(),
    })
}

impl PlanningEventSink for JsonEventSink {
    fn on_event(&self, event: PlanningEvent) {
        let name = event.name();
        let json = match event {
            PlanningEvent::OrderAdmitted {
                session,
                order_id,
                version,
                stop_count,
            }
            | PlanningEvent::OrderRemoved {
                session,
                order_id,
                version,
                stop_count,
            } => serde_json::json!({
                "event": name,
                "session": session,
                "order_id": order_id,
                "version": version,
                "stop_count": stop_count,
            }),

            PlanningEvent::OrderRejected {
                session,
                order_id,
                rejection,
            }
            | PlanningEvent::RemovalRejected {
                session,
                order_id,
                rejection,
            } => serde_json::json!({
                "event": name,
                "session": session,
                "order_id": order_id,
                "rejection": rejection_json(&rejection),
            }),

            PlanningEvent::StopsReordered {
                session,
                from,
                to,
                version,
            } => serde_json::json!({
                "event": name,
                "session": session,
                "from": from,
                "to": to,
                "version": version,
            }),

            PlanningEvent::ReorderRejected {
                session,
                from,
                to,
                rejection,
            } => serde_json::json!({
                "event": name,
                "session": session,
                "from": from,
                "to": to,
                "rejection": rejection_json(&rejection),
            }),

            PlanningEvent::SessionCleared {
                session,
                removed,
                version,
            } => serde_json::json!({
                "event": name,
                "session": session,
                "removed": removed,
                "version": version,
            }),
        };

        self.write_event(json);
    }
}
