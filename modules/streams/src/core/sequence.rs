use core::{convert::Infallible, fmt, marker::PhantomData};

use backflow_utils_rs::core::sync::ArcShared;

use super::{Publisher, Subscriber, Subscription, sequence_subscription::SequenceSubscription};


/// Publisher that emits the items of an iterable, one per unit of demand, then finishes.
///
/// Each subscription iterates its own clone of the items. An empty iterable finishes right after
/// the subscription is delivered, without waiting for demand. The failure type is only nominal,
/// so the publisher can feed chains of any failure type; see
/// [`set_failure_type`](Self::set_failure_type).
pub struct Sequence<I, E = Infallible> {
  items:    I,
  _failure: PhantomData<fn() -> E>,
}

impl<I> Sequence<I> {
  /// Creates a publisher over `items` that never fails.
  #[must_use]
  pub const fn new(items: I) -> Self {
    Self { items, _failure: PhantomData }
  }
}

impl<T> Sequence<Option<T>> {
  /// Creates a publisher that emits `value` once and finishes.
  #[must_use]
  pub const fn just(value: T) -> Self {
    Self::new(Some(value))
  }
}

impl<I, E> Sequence<I, E> {
  /// Re-labels the failure type of the publisher.
  #[must_use]
  pub fn set_failure_type<E2>(self) -> Sequence<I, E2> {
    Sequence { items: self.items, _failure: PhantomData }
  }

  /// Returns the items backing the publisher.
  #[must_use]
  pub const fn items(&self) -> &I {
    &self.items
  }
}

impl<I: Clone, E> Clone for Sequence<I, E> {
  fn clone(&self) -> Self {
    Self { items: self.items.clone(), _failure: PhantomData }
  }
}

impl<I: fmt::Debug, E> fmt::Debug for Sequence<I, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Sequence").field("items", &self.items).finish()
  }
}

impl<I, E> Publisher for Sequence<I, E>
where
  I: IntoIterator + Clone,
  I::IntoIter: Send + 'static,
  I::Item: Send + 'static,
  E: 'static,
{
  type Output = I::Item;
  type Failure = E;

  fn subscribe<S>(&self, subscriber: ArcShared<S>)
  where
    S: Subscriber<Input = I::Item, Failure = E> + 'static, {
    let subscription = ArcShared::new(SequenceSubscription::new(self.items.clone().into_iter(), subscriber.clone()));
    subscriber.receive_subscription(subscription.clone().into_dyn(|subscription| subscription as &dyn Subscription));
    subscription.drain();
  }
}
