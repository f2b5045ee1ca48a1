/// What a [`Subject`](super::Subject) does with recorded subscribers once they are no longer
/// interested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubscriberRetention {
  /// Subscribers are recorded for the lifetime of the subject and receive a no-op subscription;
  /// cancelling does not stop delivery and a completion is still sent to every recorded entry.
  #[default]
  Retain,
  /// Cancelling a subscription removes its entry, and delivering a completion clears the list.
  Prune,
}
