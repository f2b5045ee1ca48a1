use alloc::vec::Vec;

use backflow_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::{CollectError, Completion, Map, Publisher, Sink, TryMap};


/// Operator constructors and terminal helpers available on every [`Publisher`].
pub trait PublisherExt: Publisher {
  /// Transforms every value with `transform`.
  #[must_use]
  fn map<T, F>(self, transform: F) -> Map<Self, F>
  where
    Self: Sized,
    F: FnMut(Self::Output) -> T, {
    Map::new(self, transform)
  }

  /// Transforms every value with the fallible `transform`, failing the chain on the first error.
  #[must_use]
  fn try_map<T, E, F>(self, transform: F) -> TryMap<Self, F>
  where
    Self: Sized,
    F: FnMut(Self::Output) -> Result<T, E>, {
    TryMap::new(self, transform)
  }

  /// Subscribes a [`Sink`] built from the handlers and returns it, so it can be cancelled later.
  fn sink<V, C>(&self, receive_completion: C, receive_value: V) -> ArcShared<Sink<Self::Output, Self::Failure, V, C>>
  where
    V: FnMut(Self::Output) + Send + 'static,
    C: FnOnce(Completion<Self::Failure>) + Send + 'static,
    Self::Output: 'static,
    Self::Failure: 'static, {
    let sink = ArcShared::new(Sink::new(receive_completion, receive_value));
    self.subscribe(sink.clone());
    sink
  }

  /// Subscribes with unbounded demand and returns every value, provided the publisher completes
  /// before `subscribe` returns.
  ///
  /// # Errors
  ///
  /// Returns [`CollectError::Failed`] when the publisher fails and [`CollectError::Incomplete`]
  /// when it has not completed by the time `subscribe` returns; the subscription is cancelled in
  /// that case.
  fn collect_values(&self) -> Result<Vec<Self::Output>, CollectError<Self::Failure>>
  where
    Self::Output: Send + 'static,
    Self::Failure: Send + 'static, {
    let values = ArcShared::new(SpinSyncMutex::new(Vec::new()));
    let outcome = ArcShared::new(SpinSyncMutex::new(None));
    let sink = {
      let values = values.clone();
      let outcome = outcome.clone();
      self.sink(move |completion| *outcome.lock() = Some(completion), move |value| values.lock().push(value))
    };

    let completion = outcome.lock().take();
    match completion {
      | Some(Completion::Finished) => Ok(core::mem::take(&mut *values.lock())),
      | Some(Completion::Failed(failure)) => Err(CollectError::Failed(failure)),
      | None => {
        sink.cancel();
        Err(CollectError::Incomplete)
      },
    }
  }
}

impl<P: Publisher + ?Sized> PublisherExt for P {}
