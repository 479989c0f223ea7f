//! In-memory event capture for log assertions
//!
//! One capture is installed per test binary. Tests running in parallel share
//! it, so each test filters by a value only it produces (an op name, a
//! `mount_id`).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use folio_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event, every field rendered to a string
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }
}

#[derive(Default)]
struct Recorder(HashMap<String, String>);

impl Recorder {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for Recorder {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    log: EventLog,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields: recorder.0,
        };
        if let Ok(mut log) = self.log.lock() {
            log.push(captured);
        }
    }
}

/// Read handle on the captured events
#[derive(Clone)]
pub struct TestCapture {
    log: EventLog,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Events of `op`, in emission order
    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    /// Events of `op` whose `field` renders as `value`
    pub fn events_with(&self, op: &str, field: &str, value: &str) -> Vec<CapturedEvent> {
        self.events_for(op)
            .into_iter()
            .filter(|e| e.field(field) == Some(value))
            .collect()
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture as the global subscriber and return its handle
///
/// ```
/// use folio_core::log_op_start;
/// use folio_core::logging_facility::init_test_capture;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_load");
/// assert_eq!(capture.events_for("doc_load").len(), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let log = EventLog::default();
            let layer = CaptureLayer { log: log.clone() };
            tracing_subscriber::registry().with(layer).try_init().ok();
            TestCapture { log }
        })
        .clone()
}
