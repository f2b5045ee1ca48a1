use core::iter::Peekable;

use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{Completion, Demand, Subscriber, Subscription};

const LOG_TARGET: &str = "backflow::publisher";

/// Subscription of a [`Sequence`](super::Sequence) chain.
///
/// Holds the outstanding demand and delivers one item per unit of it. Delivery runs in a work-list
/// loop owned by whichever caller found the subscription idle: requests arriving meanwhile, either
/// re-entrantly from the subscriber or from another thread, only add demand for that loop to
/// consume. The stack depth therefore stays constant however many items are re-requested one at a
/// time.
pub(crate) struct SequenceSubscription<I: Iterator, S> {
  state: SpinSyncMutex<SequenceState<I, S>>,
}

struct SequenceState<I: Iterator, S> {
  items:      Peekable<I>,
  downstream: Option<ArcShared<S>>,
  pending:    Demand,
  draining:   bool,
}

enum Step<T, S> {
  Deliver(ArcShared<S>, T),
  Finish(ArcShared<S>),
  Idle,
}

impl<I, S> SequenceSubscription<I, S>
where
  I: Iterator,
  S: Subscriber<Input = I::Item>,
{
  pub(crate) fn new(items: I, downstream: ArcShared<S>) -> Self {
    Self {
      state: SpinSyncMutex::new(SequenceState {
        items:      items.peekable(),
        downstream: Some(downstream),
        pending:    Demand::NONE,
        draining:   false,
      }),
    }
  }

  /// Delivers whatever the current demand allows, or completes an exhausted sequence.
  pub(crate) fn drain(&self) {
    {
      let mut state = self.state.lock();
      if state.draining || state.downstream.is_none() {
        return;
      }
      state.draining = true;
    }
    loop {
      match self.next_step() {
        | Step::Deliver(downstream, item) => {
          let additional = downstream.receive(item);
          let mut state = self.state.lock();
          if state.downstream.is_some() {
            state.pending += additional;
          }
        },
        | Step::Finish(downstream) => {
          tracing::trace!(target: LOG_TARGET, "sequence exhausted");
          downstream.receive_completion(Completion::Finished);
          return;
        },
        | Step::Idle => return,
      }
    }
  }

  fn next_step(&self) -> Step<I::Item, S> {
    let mut state = self.state.lock();
    let Some(downstream) = state.downstream.clone() else {
      state.draining = false;
      return Step::Idle;
    };
    if state.pending.has_demand() {
      if let Some(item) = state.items.next() {
        state.pending -= 1;
        return Step::Deliver(downstream, item);
      }
    } else if state.items.peek().is_some() {
      state.draining = false;
      return Step::Idle;
    }
    state.downstream = None;
    state.pending = Demand::NONE;
    state.draining = false;
    Step::Finish(downstream)
  }
}

impl<I, S> Subscription for SequenceSubscription<I, S>
where
  I: Iterator + Send,
  I::Item: Send,
  S: Subscriber<Input = I::Item>,
{
  fn request(&self, demand: Demand) {
    {
      let mut state = self.state.lock();
      if state.downstream.is_none() {
        return;
      }
      state.pending += demand;
    }
    self.drain();
  }

  fn cancel(&self) {
    let released = {
      let mut state = self.state.lock();
      state.pending = Demand::NONE;
      state.downstream.take()
    };
    if released.is_some() {
      tracing::trace!(target: LOG_TARGET, "sequence cancelled");
    }
  }
}
