use alloc::vec;

use backflow_utils_rs::core::sync::ArcShared;

use crate::core::{
  Completion, Publisher, PublisherExt,
  testing::{RecordedEvent, RecordingSubscriber, SubjectEvent, TestingError, TrackingSubject},
};

#[test]
fn records_attachments_and_sends() {
  let subject = TrackingSubject::<i32, TestingError>::new();
  let subscriber = ArcShared::new(RecordingSubscriber::new());
  let id = subject.attach(subscriber.clone());

  subject.send(1);
  subject.send_completion(Completion::Finished);
  subject.send(2);

  assert_eq!(subject.history(), vec![
    SubjectEvent::Subscriber(id),
    SubjectEvent::Value(1),
    SubjectEvent::Completion(Completion::Finished),
    SubjectEvent::Value(2),
  ]);
  assert_eq!(subscriber.history(), vec![
    RecordedEvent::subscription(),
    RecordedEvent::Value(1),
    RecordedEvent::finished(),
  ]);
}

#[test]
fn operators_subscribe_through_the_tracking_subject() {
  let subject = TrackingSubject::<i32, TestingError>::default();
  let subscriber = ArcShared::new(RecordingSubscriber::new());
  subject.clone().map(|value| value * 10).subscribe(subscriber.clone());

  subject.send(3);

  assert_eq!(subscriber.values(), vec![30]);
  assert_eq!(subject.subject().subscriber_count(), 1);
  assert!(matches!(subject.history().first(), Some(SubjectEvent::Subscriber(_))));
}
