//! Tests for tracing integration.

use std::sync::{Arc, Mutex};

use outcome_rail::prelude::*;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

#[derive(Debug, Clone, PartialEq)]
struct Captured {
    level: Level,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct CapturingSubscriber {
    events: Arc<Mutex<Vec<Captured>>>,
}

struct FieldCollector<'a>(&'a mut Vec<(String, String)>);

impl Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl Subscriber for CapturingSubscriber {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = Vec::new();
        event.record(&mut FieldCollector(&mut fields));
        self.events
            .lock()
            .unwrap()
            .push(Captured { level: *event.metadata().level(), fields });
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

impl CapturingSubscriber {
    fn captured(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }
}

fn field<'a>(event: &'a Captured, name: &str) -> Option<&'a str> {
    event.fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

#[test]
fn trace_err_emits_a_warning_for_err() {
    let subscriber = CapturingSubscriber::default();
    let outcome = tracing::subscriber::with_default(subscriber.clone(), || {
        Outcome::<i32, &str>::err("disk full").trace_err("saving report")
    });

    assert_eq!(outcome, Outcome::err("disk full"));
    let events = subscriber.captured();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(field(&events[0], "error"), Some("\"disk full\""));
    assert_eq!(field(&events[0], "message"), Some("saving report"));
    assert_eq!(field(&events[0], "span"), Some("none"));
}

#[test]
fn trace_err_is_silent_for_ok() {
    let subscriber = CapturingSubscriber::default();
    let outcome = tracing::subscriber::with_default(subscriber.clone(), || {
        Outcome::<i32, &str>::ok(7).trace_err("saving report")
    });

    assert_eq!(outcome, Outcome::ok(7));
    assert!(subscriber.captured().is_empty());
}

#[test]
fn trace_outcome_reports_the_active_variant() {
    let subscriber = CapturingSubscriber::default();
    tracing::subscriber::with_default(subscriber.clone(), || {
        let _ = Outcome::<i32, &str>::ok(7).trace_outcome("step one");
        let _ = Outcome::<i32, &str>::err("bad").trace_outcome("step two");
    });

    let events = subscriber.captured();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event.level == Level::DEBUG));
    assert_eq!(field(&events[0], "variant"), Some("ok"));
    assert_eq!(field(&events[0], "value"), Some("7"));
    assert_eq!(field(&events[1], "variant"), Some("err"));
    assert_eq!(field(&events[1], "error"), Some("\"bad\""));
}

#[test]
fn tracing_does_not_alter_a_chain() {
    let traced = Outcome::<i32, &str>::ok(1)
        .trace_outcome("start")
        .on_ok(|x| Outcome::ok(x + 1))
        .trace_err("after increment");

    assert_eq!(traced, Outcome::ok(2));
}
