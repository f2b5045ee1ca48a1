//! Multicast publisher driven by external code.

use alloc::vec::Vec;

use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{
  Completion, EmptySubscription, Publisher, Subscriber, SubjectConfig, SubscriberId, SubscriberRetention,
  Subscription, SubscriptionHandle, subject_entry::SubjectEntry, subject_signal::SubjectSignal,
  subject_state::SubjectState, subject_subscription::SubjectSubscription,
};

#[cfg(test)]
mod tests;

const LOG_TARGET: &str = "backflow::subject";

/// Publisher that external code pushes values and a completion into, fanned out to every recorded
/// subscriber in subscribe order.
///
/// A subject does not apply backpressure: the demand its subscribers return is ignored. Clones
/// share the same subscribers and state.
///
/// Signals sent while a fan-out is already running, re-entrantly from a subscriber or from another
/// thread, are queued and delivered by the running fan-out once it finishes the current signal, so
/// every subscriber observes the same order. After a completion has been sent, further signals are
/// dropped; subscribers attached after it was delivered receive it right after their subscription.
pub struct Subject<T, F> {
  state:  ArcShared<SpinSyncMutex<SubjectState<T, F>>>,
  config: SubjectConfig,
}

impl<T, F> Subject<T, F>
where
  T: Clone + Send + 'static,
  F: Clone + Send + 'static,
{
  /// Creates a subject with the default configuration.
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(SubjectConfig::default())
  }

  /// Creates a subject with the provided configuration.
  #[must_use]
  pub fn with_config(config: SubjectConfig) -> Self {
    Self { state: ArcShared::new(SpinSyncMutex::new(SubjectState::new())), config }
  }

  /// Returns the configuration of this subject.
  #[must_use]
  pub const fn config(&self) -> SubjectConfig {
    self.config
  }

  /// Records `subscriber`, hands it its subscription and returns its identity.
  pub fn attach<S>(&self, subscriber: ArcShared<S>) -> SubscriberId
  where
    S: Subscriber<Input = T, Failure = F> + 'static, {
    let id = SubscriberId::next();
    let subscriber = subscriber.into_dyn(|subscriber| subscriber as &dyn Subscriber<Input = T, Failure = F>);
    let prune = self.config.retention() == SubscriberRetention::Prune;
    let late_completion = {
      let mut state = self.state.lock();
      let late_completion = if state.terminated { state.completion.clone() } else { None };
      if !(prune && late_completion.is_some()) {
        state.entries.push(SubjectEntry::new(id, subscriber.clone()));
      }
      late_completion
    };
    tracing::trace!(target: LOG_TARGET, id = id.value(), "subscriber attached");

    let subscription: SubscriptionHandle = if prune && late_completion.is_none() {
      ArcShared::new(SubjectSubscription::new(self.state.clone(), id))
        .into_dyn(|subscription| subscription as &dyn Subscription)
    } else {
      EmptySubscription::handle()
    };
    subscriber.receive_subscription(subscription);
    if let Some(completion) = late_completion {
      subscriber.receive_completion(completion);
    }
    id
  }

  /// Sends `value` to every recorded subscriber.
  pub fn send(&self, value: T) {
    self.enqueue(SubjectSignal::Value(value));
  }

  /// Sends `completion` to every recorded subscriber.
  pub fn send_completion(&self, completion: Completion<F>) {
    self.enqueue(SubjectSignal::Completion(completion));
  }

  /// Returns the identities of the recorded subscribers in subscribe order.
  #[must_use]
  pub fn subscriber_ids(&self) -> Vec<SubscriberId> {
    self.state.lock().entries.iter().map(SubjectEntry::id).collect()
  }

  /// Returns the number of recorded subscribers.
  #[must_use]
  pub fn subscriber_count(&self) -> usize {
    self.state.lock().entries.len()
  }

  /// Returns `true` once a completion has been sent.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.state.lock().completion.is_some()
  }

  fn enqueue(&self, signal: SubjectSignal<T, F>) {
    {
      let mut state = self.state.lock();
      if state.completion.is_some() {
        tracing::debug!(target: LOG_TARGET, "dropping signal sent after completion");
        return;
      }
      if let SubjectSignal::Completion(completion) = &signal {
        state.completion = Some(completion.clone());
      }
      state.pending.push_back(signal);
      if state.draining {
        return;
      }
      state.draining = true;
    }
    self.drain();
  }

  fn drain(&self) {
    let prune = self.config.retention() == SubscriberRetention::Prune;
    loop {
      let (signal, entries) = {
        let mut state = self.state.lock();
        let Some(signal) = state.pending.pop_front() else {
          state.draining = false;
          return;
        };
        let entries = state.entries.clone();
        if matches!(signal, SubjectSignal::Completion(_)) {
          state.terminated = true;
          if prune {
            state.entries.clear();
          }
        }
        (signal, entries)
      };
      match signal {
        | SubjectSignal::Value(value) => {
          for entry in &entries {
            if prune && !self.state.lock().is_registered(entry.id()) {
              continue;
            }
            // Demand from subject subscribers is informational only.
            let _demand = entry.subscriber().receive(value.clone());
          }
        },
        | SubjectSignal::Completion(completion) => {
          tracing::trace!(target: LOG_TARGET, subscribers = entries.len(), "delivering completion");
          for entry in &entries {
            entry.subscriber().receive_completion(completion.clone());
          }
        },
      }
    }
  }
}

impl<T, F> Clone for Subject<T, F> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone(), config: self.config }
  }
}

impl<T, F> Default for Subject<T, F>
where
  T: Clone + Send + 'static,
  F: Clone + Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, F> Publisher for Subject<T, F>
where
  T: Clone + Send + 'static,
  F: Clone + Send + 'static,
{
  type Output = T;
  type Failure = F;

  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = T, Failure = F> + 'static, {
    let _id = self.attach(subscriber);
  }
}
