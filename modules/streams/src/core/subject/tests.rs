use alloc::{vec, vec::Vec};
use std::thread;

use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use crate::core::{
  Completion, Demand, Publisher, Subject, SubjectConfig, SubscriberRetention,
  testing::{RecordedEvent, RecordingSubscriber, TestingError},
};

type Recorder = RecordingSubscriber<i32, TestingError>;

fn pruning() -> Subject<i32, TestingError> {
  Subject::with_config(SubjectConfig::new().with_retention(SubscriberRetention::Prune))
}

#[test]
fn fans_out_in_subscribe_order() {
  let subject = Subject::<i32, TestingError>::new();
  let order = ArcShared::new(SpinSyncMutex::new(Vec::new()));
  let subscribers: Vec<_> = (0..3)
    .map(|index| {
      let order = order.clone();
      ArcShared::new(Recorder::new().with_on_value(move |value| {
        order.lock().push((index, *value));
        Demand::NONE
      }))
    })
    .collect();
  let ids: Vec<_> = subscribers.iter().map(|subscriber| subject.attach(subscriber.clone())).collect();

  subject.send(1);
  subject.send(2);

  assert_eq!(subject.subscriber_ids(), ids);
  assert_eq!(*order.lock(), [(0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]);
}

#[test]
fn values_sent_before_subscribing_are_not_replayed() {
  let subject = Subject::<i32, TestingError>::new();
  subject.send(1);

  let subscriber = ArcShared::new(Recorder::new());
  subject.subscribe(subscriber.clone());
  subject.send(2);

  assert_eq!(subscriber.history(), vec![RecordedEvent::subscription(), RecordedEvent::Value(2)]);
}

#[test]
fn delivers_a_single_completion_and_drops_later_signals() {
  let subject = Subject::<i32, TestingError>::new();
  let subscriber = ArcShared::new(Recorder::new());
  subject.subscribe(subscriber.clone());

  subject.send_completion(Completion::Failed(TestingError::Oops));
  subject.send(3);
  subject.send_completion(Completion::Finished);

  assert!(subject.is_completed());
  assert_eq!(subscriber.history(), vec![RecordedEvent::subscription(), RecordedEvent::failed(TestingError::Oops)]);
}

#[test]
fn late_subscribers_receive_the_completion() {
  let subject = Subject::<i32, TestingError>::new();
  subject.send_completion(Completion::Finished);

  let subscriber = ArcShared::new(Recorder::new());
  subject.subscribe(subscriber.clone());

  assert_eq!(subscriber.history(), vec![RecordedEvent::subscription(), RecordedEvent::finished()]);
}

#[test]
fn ignores_subscriber_demand() {
  let subject = Subject::<i32, TestingError>::new();
  let subscriber = ArcShared::new(Recorder::new());
  subject.subscribe(subscriber.clone());

  subject.send(1);
  subject.send(2);

  assert_eq!(subscriber.values(), vec![1, 2]);
}

#[test]
fn retaining_subject_keeps_cancelled_subscribers() {
  let subject = Subject::<i32, TestingError>::new();
  let subscriber = ArcShared::new(Recorder::new());
  subject.subscribe(subscriber.clone());

  subscriber.subscriptions()[0].cancel();
  subject.send(1);

  assert_eq!(subject.subscriber_count(), 1);
  assert_eq!(subscriber.values(), vec![1]);
}

#[test]
fn pruning_subject_forgets_cancelled_subscribers() {
  let subject = pruning();
  let kept = ArcShared::new(Recorder::new());
  let cancelled = ArcShared::new(Recorder::new());
  let kept_id = subject.attach(kept.clone());
  subject.attach(cancelled.clone());

  cancelled.subscriptions()[0].cancel();
  subject.send(1);

  assert_eq!(subject.subscriber_ids(), vec![kept_id]);
  assert_eq!(kept.values(), vec![1]);
  assert!(cancelled.values().is_empty());
}

#[test]
fn pruning_subject_forgets_everyone_after_completion() {
  let subject = pruning();
  let subscriber = ArcShared::new(Recorder::new());
  subject.subscribe(subscriber.clone());

  subject.send_completion(Completion::Finished);
  let late = ArcShared::new(Recorder::new());
  subject.subscribe(late.clone());

  assert_eq!(subject.subscriber_count(), 0);
  assert_eq!(subscriber.completions(), vec![Completion::Finished]);
  assert_eq!(late.history(), vec![RecordedEvent::subscription(), RecordedEvent::finished()]);
}

#[test]
fn cancelling_during_fan_out_skips_the_cancelled_subscriber_when_pruning() {
  let subject = pruning();
  let second = ArcShared::new(Recorder::new());
  let victim = second.clone();
  let first = ArcShared::new(Recorder::new().with_on_value(move |_| {
    victim.subscriptions()[0].cancel();
    Demand::NONE
  }));
  subject.attach(first.clone());
  subject.attach(second.clone());

  subject.send(1);

  assert_eq!(first.values(), vec![1]);
  assert!(second.values().is_empty());
}

#[test]
fn reentrant_sends_are_queued_behind_the_current_signal() {
  let subject = Subject::<i32, TestingError>::new();
  let reentrant = subject.clone();
  let first = ArcShared::new(Recorder::new().with_on_value(move |value| {
    if *value == 1 {
      reentrant.send(2);
      reentrant.send_completion(Completion::Finished);
    }
    Demand::NONE
  }));
  let second = ArcShared::new(Recorder::new());
  subject.subscribe(first.clone());
  subject.subscribe(second.clone());

  subject.send(1);

  let expected = vec![
    RecordedEvent::subscription(),
    RecordedEvent::Value(1),
    RecordedEvent::Value(2),
    RecordedEvent::finished(),
  ];
  assert_eq!(first.history(), expected);
  assert_eq!(second.history(), expected);
}

#[test]
fn subscribers_observe_the_same_order_across_threads() {
  let subject = Subject::<i32, TestingError>::new();
  let first = ArcShared::new(Recorder::new());
  let second = ArcShared::new(Recorder::new());
  subject.subscribe(first.clone());
  subject.subscribe(second.clone());

  let senders: Vec<_> = (0..4)
    .map(|thread_index| {
      let subject = subject.clone();
      thread::spawn(move || {
        for value in 0..250 {
          subject.send(thread_index * 1_000 + value);
        }
      })
    })
    .collect();
  for sender in senders {
    sender.join().expect("sender thread panicked");
  }

  assert_eq!(first.values().len(), 1_000);
  assert_eq!(first.values(), second.values());
}
