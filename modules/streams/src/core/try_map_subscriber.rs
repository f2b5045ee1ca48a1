use core::marker::PhantomData;

use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{Completion, Demand, Subscriber, Subscription, SubscriptionHandle, relay::Relay};

const LOG_TARGET: &str = "backflow::operator";

/// Upstream-facing half of a [`TryMap`](super::TryMap) chain.
///
/// `UF` is the upstream failure type; upstream failures are converted into the downstream failure
/// type on the way through.
pub(crate) struct TryMapSubscriber<S, F, In, UF> {
  relay:     ArcShared<Relay<S>>,
  transform: SpinSyncMutex<F>,
  _input:    PhantomData<fn(In, UF)>,
}

impl<S, F, In, UF> TryMapSubscriber<S, F, In, UF> {
  pub(crate) fn new(downstream: ArcShared<S>, transform: F) -> Self {
    Self { relay: ArcShared::new(Relay::new(downstream)), transform: SpinSyncMutex::new(transform), _input: PhantomData }
  }
}

impl<S, F, In, UF> Subscriber for TryMapSubscriber<S, F, In, UF>
where
  S: Subscriber + 'static,
  F: FnMut(In) -> Result<S::Input, S::Failure> + Send,
  UF: Into<S::Failure>,
{
  type Input = In;
  type Failure = UF;

  fn receive_subscription(&self, subscription: SubscriptionHandle) {
    match self.relay.attach(subscription.clone()) {
      | Some(downstream) => {
        tracing::trace!(target: LOG_TARGET, "try_map subscribed upstream");
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
    let result = (*transform)(input);
    drop(transform);
    match result {
      | Ok(output) => downstream.receive(output),
      | Err(failure) => {
        drop(downstream);
        // Downstream may have cancelled while the transform ran; then the failure has nowhere to go.
        if let Some((downstream, upstream)) = self.relay.fail() {
          tracing::trace!(target: LOG_TARGET, "transform failed, terminating chain");
          downstream.receive_completion(Completion::Failed(failure));
          if let Some(upstream) = upstream {
            upstream.cancel();
          }
        }
        Demand::NONE
      },
    }
  }

  fn receive_completion(&self, completion: Completion<UF>) {
    match self.relay.complete() {
      | Some(downstream) => downstream.receive_completion(completion.map_failure(Into::into)),
      | None => tracing::debug!(target: LOG_TARGET, "dropping completion outside of an active subscription"),
    }
  }
}
