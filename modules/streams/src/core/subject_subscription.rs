use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{Demand, SubscriberId, Subscription, subject_state::SubjectState};

const LOG_TARGET: &str = "backflow::subject";

/// Subscription handed out by a pruning [`Subject`](super::Subject).
///
/// Demand is informational and ignored; `cancel` removes the subscriber's entry.
pub(crate) struct SubjectSubscription<T, F> {
  state: ArcShared<SpinSyncMutex<SubjectState<T, F>>>,
  id:    SubscriberId,
}

impl<T, F> SubjectSubscription<T, F> {
  pub(crate) const fn new(state: ArcShared<SpinSyncMutex<SubjectState<T, F>>>, id: SubscriberId) -> Self {
    Self { state, id }
  }
}

impl<T: Send, F: Send> Subscription for SubjectSubscription<T, F> {
  fn request(&self, _demand: Demand) {}

  fn cancel(&self) {
    let removed = self.state.lock().remove(self.id);
    if removed.is_some() {
      tracing::trace!(target: LOG_TARGET, id = self.id.value(), "subscriber cancelled");
    }
  }
}
