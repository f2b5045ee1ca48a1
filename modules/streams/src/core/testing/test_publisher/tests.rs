use alloc::vec;

use backflow_utils_rs::core::sync::ArcShared;

use crate::core::{
  Completion, Demand, Publisher,
  testing::{RecordedEvent, RecordingSubscriber, SubscriptionEvent, TestPublisher, TestingError},
};

#[test]
fn send_without_subscriber_reports_no_demand() {
  let publisher = TestPublisher::<i32, TestingError>::new();
  assert!(!publisher.has_subscriber());
  assert_eq!(publisher.send(1), Demand::NONE);
  publisher.send_completion(Completion::Finished);
}

#[test]
fn drives_the_attached_subscriber() {
  let publisher = TestPublisher::<i32, TestingError>::new();
  let subscriber =
    ArcShared::new(RecordingSubscriber::requesting(Demand::finite(1)).with_on_value(|_| Demand::finite(2)));
  publisher.subscribe(subscriber.clone());

  assert_eq!(publisher.send(7), Demand::finite(2));
  publisher.send_completion(Completion::Failed(TestingError::Oops));

  assert_eq!(subscriber.history(), vec![
    RecordedEvent::subscription(),
    RecordedEvent::Value(7),
    RecordedEvent::failed(TestingError::Oops),
  ]);
  assert_eq!(publisher.subscription().history(), vec![SubscriptionEvent::Requested(Demand::finite(1))]);
}

#[test]
fn clones_share_the_subscriber() {
  let publisher = TestPublisher::<i32, TestingError>::default();
  let clone = publisher.clone();
  let subscriber = ArcShared::new(RecordingSubscriber::new());
  publisher.subscribe(subscriber.clone());

  clone.send(9);
  assert_eq!(subscriber.values(), vec![9]);
  assert!(ArcShared::ptr_eq(&publisher.subscription(), &clone.subscription()));
}
