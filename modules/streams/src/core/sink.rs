use core::marker::PhantomData;

use backflow_utils_rs::core::sync::SpinSyncMutex;

use super::{Completion, Demand, Subscriber, SubscriptionHandle};


const LOG_TARGET: &str = "backflow::subscriber";

/// Terminal subscriber that requests unbounded demand and hands every signal to closures.
///
/// `receive_value` runs once per value and `receive_completion` at most once. Calling
/// [`cancel`](Self::cancel) stops the chain; the sink then ignores anything still delivered.
pub struct Sink<In, F, V, C> {
  state:              SpinSyncMutex<SinkState>,
  receive_value:      SpinSyncMutex<V>,
  receive_completion: SpinSyncMutex<Option<C>>,
  _signals:           PhantomData<fn(In, F)>,
}

struct SinkState {
  subscription: Option<SubscriptionHandle>,
  terminated:   bool,
}

impl<In, F, V, C> Sink<In, F, V, C>
where
  V: FnMut(In) + Send,
  C: FnOnce(Completion<F>) + Send,
{
  /// Creates a sink from its completion and value handlers.
  #[must_use]
  pub const fn new(receive_completion: C, receive_value: V) -> Self {
    Self {
      state:              SpinSyncMutex::new(SinkState { subscription: None, terminated: false }),
      receive_value:      SpinSyncMutex::new(receive_value),
      receive_completion: SpinSyncMutex::new(Some(receive_completion)),
      _signals:           PhantomData,
    }
  }

  /// Cancels the upstream subscription. Idempotent.
  pub fn cancel(&self) {
    let subscription = {
      let mut state = self.state.lock();
      state.terminated = true;
      state.subscription.take()
    };
    if let Some(subscription) = subscription {
      subscription.cancel();
    }
  }

  /// Returns `true` once the sink completed or was cancelled.
  #[must_use]
  pub fn is_terminated(&self) -> bool {
    self.state.lock().terminated
  }
}

impl<In, F, V, C> Subscriber for Sink<In, F, V, C>
where
  V: FnMut(In) + Send,
  C: FnOnce(Completion<F>) + Send,
{
  type Input = In;
  type Failure = F;

  fn receive_subscription(&self, subscription: SubscriptionHandle) {
    {
      let mut state = self.state.lock();
      if state.terminated || state.subscription.is_some() {
        drop(state);
        tracing::debug!(target: LOG_TARGET, "cancelling unexpected subscription");
        subscription.cancel();
        return;
      }
      state.subscription = Some(subscription.clone());
    }
    subscription.request(Demand::unbounded());
  }

  fn receive(&self, input: In) -> Demand {
    if self.state.lock().terminated {
      tracing::debug!(target: LOG_TARGET, "dropping value after termination");
      return Demand::NONE;
    }
    match self.receive_value.try_lock() {
      | Some(mut receive_value) => (*receive_value)(input),
      | None => tracing::debug!(target: LOG_TARGET, "dropping value delivered while the value handler is running"),
    }
    Demand::NONE
  }

  fn receive_completion(&self, completion: Completion<F>) {
    {
      let mut state = self.state.lock();
      if state.terminated {
        return;
      }
      state.terminated = true;
      state.subscription = None;
    }
    let handler = self.receive_completion.lock().take();
    if let Some(handler) = handler {
      handler(completion);
    }
  }
}
