use backflow_utils_rs::core::sync::ArcShared;

use super::Demand;

/// Handle through which a subscriber requests values and cancels.
///
/// Implementations never fail and never panic. After `cancel`, further `request` calls have no
/// effect and nothing more is delivered through the subscription; `cancel` itself is idempotent.
/// Both methods may be called re-entrantly from inside the subscriber's own callbacks.
pub trait Subscription: Send + Sync {
  /// Adds `demand` to the outstanding demand of the subscription.
  fn request(&self, demand: Demand);

  /// Stops delivery and releases upstream resources.
  fn cancel(&self);
}

/// Shared, type-erased subscription handle passed to subscribers.
pub type SubscriptionHandle = ArcShared<dyn Subscription>;
