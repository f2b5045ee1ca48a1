//! Demand and cancellation link shared by operators.

use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{Demand, Subscription, SubscriptionHandle, relay_status::RelayStatus};


const LOG_TARGET: &str = "backflow::operator";

/// Link owned by an operator node: it holds the upstream subscription and the downstream subscriber,
/// and is itself the subscription handed downstream.
///
/// `request` is forwarded upstream verbatim while active. `cancel` reaches upstream exactly once.
/// Every terminal transition releases both references, which breaks the subscriber/subscription
/// reference cycle of the chain. The lock is never held while calling into another node.
pub(crate) struct Relay<S> {
  state: SpinSyncMutex<RelayState<S>>,
}

struct RelayState<S> {
  status:     RelayStatus,
  upstream:   Option<SubscriptionHandle>,
  downstream: Option<ArcShared<S>>,
}

impl<S> Relay<S> {
  pub(crate) const fn new(downstream: ArcShared<S>) -> Self {
    Self {
      state: SpinSyncMutex::new(RelayState {
        status:     RelayStatus::AwaitingSubscription,
        upstream:   None,
        downstream: Some(downstream),
      }),
    }
  }

  #[cfg(test)]
  pub(crate) fn status(&self) -> RelayStatus {
    self.state.lock().status
  }

  /// Stores the upstream subscription and returns the downstream subscriber to introduce it to.
  ///
  /// Returns `None` if the relay already has an upstream or has terminated.
  pub(crate) fn attach(&self, upstream: SubscriptionHandle) -> Option<ArcShared<S>> {
    let mut state = self.state.lock();
    if state.status != RelayStatus::AwaitingSubscription {
      return None;
    }
    state.status = RelayStatus::Active;
    state.upstream = Some(upstream);
    state.downstream.clone()
  }

  /// Returns the downstream subscriber while values may still flow.
  pub(crate) fn active_downstream(&self) -> Option<ArcShared<S>> {
    let state = self.state.lock();
    match state.status {
      | RelayStatus::Active => state.downstream.clone(),
      | _ => None,
    }
  }

  /// Terminates the link because upstream completed.
  ///
  /// Returns the downstream subscriber exactly once, so the completion is forwarded at most once.
  pub(crate) fn complete(&self) -> Option<ArcShared<S>> {
    let (downstream, upstream) = {
      let mut state = self.state.lock();
      if state.status != RelayStatus::Active {
        return None;
      }
      state.status = RelayStatus::Completed;
      (state.downstream.take(), state.upstream.take())
    };
    drop(upstream);
    tracing::trace!(target: LOG_TARGET, "upstream completed");
    downstream
  }

  /// Terminates the link on behalf of the operator itself.
  ///
  /// Returns the downstream subscriber to fail and the upstream subscription to cancel, exactly
  /// once.
  pub(crate) fn fail(&self) -> Option<(ArcShared<S>, Option<SubscriptionHandle>)> {
    let mut state = self.state.lock();
    if state.status != RelayStatus::Active {
      return None;
    }
    state.status = RelayStatus::Completed;
    let upstream = state.upstream.take();
    state.downstream.take().map(|downstream| (downstream, upstream))
  }
}

impl<S: Send + Sync> Subscription for Relay<S> {
  fn request(&self, demand: Demand) {
    let upstream = {
      let state = self.state.lock();
      match state.status {
        | RelayStatus::Active => state.upstream.clone(),
        | _ => None,
      }
    };
    match upstream {
      | Some(upstream) => upstream.request(demand),
      | None => tracing::trace!(target: LOG_TARGET, %demand, "ignoring request on a terminated operator"),
    }
  }

  fn cancel(&self) {
    let (upstream, downstream) = {
      let mut state = self.state.lock();
      if state.status.is_terminal() {
        return;
      }
      state.status = RelayStatus::Cancelled;
      (state.upstream.take(), state.downstream.take())
    };
    tracing::trace!(target: LOG_TARGET, "downstream cancelled");
    drop(downstream);
    if let Some(upstream) = upstream {
      upstream.cancel();
    }
  }
}
