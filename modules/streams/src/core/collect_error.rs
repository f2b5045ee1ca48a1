
/// Errors returned by [`PublisherExt::collect_values`](super::PublisherExt::collect_values).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectError<F> {
  /// The publisher completed with a failure.
  #[error("stream failed: {0:?}")]
  Failed(F),
  /// The publisher did not complete before `subscribe` returned.
  #[error("stream did not complete synchronously")]
  Incomplete,
}
