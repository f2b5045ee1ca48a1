use alloc::vec;

use backflow_utils_rs::core::sync::ArcShared;

use crate::core::{
  Fail, Publisher,
  testing::{RecordedEvent, RecordingSubscriber, TestingError},
};

#[test]
fn fails_every_subscriber() {
  let publisher = Fail::<i32, _>::new(TestingError::Oops);
  assert_eq!(publisher.failure(), &TestingError::Oops);

  for _ in 0..2 {
    let subscriber = ArcShared::new(RecordingSubscriber::new());
    publisher.subscribe(subscriber.clone());
    assert_eq!(subscriber.history(), vec![RecordedEvent::subscription(), RecordedEvent::failed(TestingError::Oops)]);
  }
}
