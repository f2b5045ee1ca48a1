use alloc::vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use backflow_utils_rs::core::sync::ArcShared;

use crate::core::{
  Completion, Demand, Publisher, PublisherExt,
  testing::{RecordedEvent, RecordingSubscriber, SubscriptionEvent, TestPublisher, TestingError},
};

type Recorder = RecordingSubscriber<i32, TestingError>;

fn doubling_below_100(calls: ArcShared<AtomicUsize>) -> impl FnMut(i32) -> Result<i32, TestingError> + Clone + Send {
  move |value| {
    calls.fetch_add(1, Ordering::SeqCst);
    if value == 100 { Err(TestingError::from("too much")) } else { Ok(value * 2) }
  }
}

#[test]
fn failure_terminates_the_chain_and_cancels_upstream() {
  let calls = ArcShared::new(AtomicUsize::new(0));
  let publisher = TestPublisher::<i32, TestingError>::new();
  let subscriber = ArcShared::new(Recorder::requesting(Demand::unbounded()).with_on_value(|_| Demand::finite(1)));
  publisher.clone().try_map(doubling_below_100(calls.clone())).subscribe(subscriber.clone());

  assert_eq!(publisher.send(2), Demand::finite(1));
  assert_eq!(publisher.send(100), Demand::NONE);
  assert_eq!(publisher.send(9), Demand::NONE);
  publisher.send_completion(Completion::Finished);

  assert_eq!(subscriber.history(), vec![
    RecordedEvent::subscription(),
    RecordedEvent::Value(4),
    RecordedEvent::failed(TestingError::from("too much")),
  ]);
  assert_eq!(calls.load(Ordering::SeqCst), 2);
  assert_eq!(publisher.subscription().history(), vec![
    SubscriptionEvent::Requested(Demand::unbounded()),
    SubscriptionEvent::Cancelled,
  ]);
}

#[test]
fn cancel_after_failure_does_not_reach_upstream_again() {
  let publisher = TestPublisher::<i32, TestingError>::new();
  let subscriber = ArcShared::new(Recorder::new());
  publisher.clone().try_map(|_: i32| Err::<i32, _>(TestingError::Oops)).subscribe(subscriber.clone());

  publisher.send(1);
  subscriber.subscriptions()[0].cancel();

  assert_eq!(publisher.subscription().cancellations(), 1);
}

#[test]
fn upstream_failures_are_converted() {
  #[derive(Debug, Clone, PartialEq)]
  struct Upstream;

  impl From<Upstream> for TestingError {
    fn from(_: Upstream) -> Self {
      TestingError::from("upstream")
    }
  }

  let publisher = TestPublisher::<i32, Upstream>::new();
  let subscriber = ArcShared::new(Recorder::new());
  publisher.clone().try_map(|value: i32| Ok::<_, TestingError>(value)).subscribe(subscriber.clone());

  publisher.send_completion(Completion::Failed(Upstream));

  assert_eq!(subscriber.completions(), vec![Completion::Failed(TestingError::from("upstream"))]);
}

#[test]
fn successful_values_keep_downstream_demand() {
  let publisher = TestPublisher::<i32, TestingError>::new();
  let subscriber = ArcShared::new(Recorder::new().with_on_value(|_| Demand::finite(4)));
  publisher.clone().try_map(|value: i32| Ok::<_, TestingError>(value)).subscribe(subscriber.clone());

  assert_eq!(publisher.send(0), Demand::finite(4));
  assert!(publisher.subscription().history().is_empty());
}

#[test]
fn downstream_cancel_during_transform_swallows_the_failure() {
  let publisher = TestPublisher::<i32, TestingError>::new();
  let subscriber = ArcShared::new(Recorder::new());
  let downstream = subscriber.clone();
  publisher
    .clone()
    .try_map(move |_: i32| {
      downstream.subscriptions()[0].cancel();
      Err::<i32, _>(TestingError::Oops)
    })
    .subscribe(subscriber.clone());

  assert_eq!(publisher.send(1), Demand::NONE);

  assert_eq!(subscriber.history(), vec![RecordedEvent::subscription()]);
  assert_eq!(publisher.subscription().cancellations(), 1);
}
