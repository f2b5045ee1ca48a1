use core::marker::PhantomData;

use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{Completion, Demand, Subscriber, Subscription, SubscriptionHandle, relay::Relay};

const LOG_TARGET: &str = "backflow::operator";

/// Upstream-facing half of a [`Map`](super::Map) chain.
///
/// The transform sits behind a `try_lock` that doubles as the in-flight guard: a value arriving
/// while the transform is still running for this node is a protocol violation and is dropped.
pub(crate) struct MapSubscriber<S, F, In> {
  relay:     ArcShared<Relay<S>>,
  transform: SpinSyncMutex<F>,
  _input:    PhantomData<fn(In)>,
}

impl<S, F, In> MapSubscriber<S, F, In> {
  pub(crate) fn new(downstream: ArcShared<S>, transform: F) -> Self {
    Self { relay: ArcShared::new(Relay::new(downstream)), transform: SpinSyncMutex::new(transform), _input: PhantomData }
  }
}

impl<S, F, In> Subscriber for MapSubscriber<S, F, In>
where
  S: Subscriber + 'static,
  F: FnMut(In) -> S::Input + Send,
{
  type Input = In;
  type Failure = S::Failure;

  fn receive_subscription(&self, subscription: SubscriptionHandle) {
    match self.relay.attach(subscription.clone()) {
      | Some(downstream) => {
        tracing::trace!(target: LOG_TARGET, "map subscribed upstream");
        downstream.receive_subscription(self.relay.clone().into_dyn(|relay| relay as &dyn Subscription));
      },
      | None => {
        tracing::debug!(target: LOG_TARGET, "cancelling duplicate upstream subscription");
        subscription.cancel();
      },
    }
  }

  fn receive(&self, input: In) -> Demand {
    let Some(downstream) = self.relay.active_downstream() else {
      tracing::debug!(target: LOG_TARGET, "dropping value outside of an active subscription");
      return Demand::NONE;
    };
    let Some(mut transform) = self.transform.try_lock() else {
      tracing::debug!(target: LOG_TARGET, "dropping value delivered while the transform is running");
      return Demand::NONE;
    };
    let output = (*transform)(input);
    drop(transform);
    downstream.receive(output)
  }

  fn receive_completion(&self, completion: Completion<S::Failure>) {
    match self.relay.complete() {
      | Some(downstream) => downstream.receive_completion(completion),
      | None => tracing::debug!(target: LOG_TARGET, "dropping completion outside of an active subscription"),
    }
  }
}
