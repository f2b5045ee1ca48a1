//! Log events emitted when protocol misuse is dropped.

use std::sync::{Arc, Mutex};

use backflow_streams_rs::core::{
  Completion, Demand, Publisher, PublisherExt, Sequence, Subject,
  testing::{RecordingSubscriber, TestPublisher, TestingError},
};
use backflow_utils_rs::core::sync::ArcShared;
use tracing::{
  Event, Level, Metadata,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
  subscriber::with_default,
};

#[test]
fn values_after_completion_are_dropped_with_a_debug_event() {
  let collector = LogCollector::default();
  let publisher = TestPublisher::<i32, TestingError>::new();
  let subscriber = ArcShared::new(RecordingSubscriber::<i32, TestingError>::requesting(Demand::unbounded()));
  publisher.clone().map(|value| value + 1).subscribe(subscriber.clone());

  with_default(collector.clone(), || {
    publisher.send_completion(Completion::Finished);
    publisher.send(1);
  });

  assert!(subscriber.values().is_empty());
  let dropped = collector.events_for("backflow::operator");
  assert!(
    dropped.iter().any(|event| event.level == Level::DEBUG && event.message.contains("dropping value")),
    "missing drop event: {dropped:?}"
  );
}

#[test]
fn subject_reports_signals_sent_after_completion() {
  let collector = LogCollector::default();
  let subject = Subject::<i32, TestingError>::new();

  with_default(collector.clone(), || {
    subject.send_completion(Completion::Finished);
    subject.send(1);
  });

  let events = collector.events_for("backflow::subject");
  assert_eq!(events.iter().filter(|event| event.level == Level::DEBUG).count(), 1);
}

#[test]
fn successful_chains_emit_no_debug_events() {
  let collector = LogCollector::default();

  let values = with_default(collector.clone(), || Sequence::new(1..=3).map(|value| value * 2).collect_values());

  assert_eq!(values, Ok(vec![2, 4, 6]));
  assert!(collector.events().iter().all(|event| event.level != Level::DEBUG));
}

#[derive(Clone, Default)]
struct LogCollector {
  events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCollector {
  fn events(&self) -> Vec<CapturedEvent> {
    self.events.lock().expect("lock").clone()
  }

  fn events_for(&self, target: &str) -> Vec<CapturedEvent> {
    self.events().into_iter().filter(|event| event.target == target).collect()
  }
}

impl tracing::Subscriber for LogCollector {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _: &Id, _: &Record<'_>) {}

  fn record_follows_from(&self, _: &Id, _: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let metadata = event.metadata();
    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);
    self.events.lock().expect("lock").push(CapturedEvent {
      level:   *metadata.level(),
      target:  metadata.target().to_owned(),
      message: visitor.message,
    });
  }

  fn enter(&self, _: &Id) {}

  fn exit(&self, _: &Id) {}
}

#[derive(Clone, Debug)]
struct CapturedEvent {
  level:   Level,
  target:  String,
  message: String,
}

#[derive(Default)]
struct MessageVisitor {
  message: String,
}

impl Visit for MessageVisitor {
  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    if field.name() == "message" {
      self.message = format!("{value:?}");
    }
  }
}
