/// Error returned when a publisher is drained synchronously.
mod collect_error;
/// Terminal signal types.
mod completion;
/// Demand model types.
mod demand;
/// Completion-only publisher.
mod empty;
/// Pre-satisfied subscription.
mod empty_subscription;
/// Failing publisher.
mod fail;
/// Total mapping operator.
mod map;
/// Upstream side of the mapping operator (internal).
mod map_subscriber;
/// Publisher capability.
mod publisher;
/// Operator constructors and draining helpers.
mod publisher_ext;
/// Demand and cancellation link shared by operators (internal).
mod relay;
/// Relay lifecycle states (internal).
mod relay_status;
/// Iterator-backed publisher.
mod sequence;
/// Demand-honouring subscription of the iterator-backed publisher (internal).
mod sequence_subscription;
/// Closure-based terminal subscriber.
mod sink;
/// Multicast publisher.
mod subject;
/// Subject configuration.
mod subject_config;
/// Recorded subject subscriber (internal).
mod subject_entry;
/// Queued subject signal (internal).
mod subject_signal;
/// Shared subject state (internal).
mod subject_state;
/// Subscription handed out by pruning subjects (internal).
mod subject_subscription;
/// Subscriber capability.
mod subscriber;
/// Subscriber identity.
mod subscriber_id;
/// Subject subscriber retention policies.
mod subscriber_retention;
/// Subscription capability.
mod subscription;
/// Fallible mapping operator.
mod try_map;
/// Upstream side of the fallible mapping operator (internal).
mod try_map_subscriber;

/// Recording subscribers and controllable publishers for protocol tests.
pub mod testing;

pub use collect_error::CollectError;
pub use completion::Completion;
pub use demand::Demand;
pub use empty::Empty;
pub use empty_subscription::EmptySubscription;
pub use fail::Fail;
pub use map::Map;
pub use publisher::Publisher;
pub use publisher_ext::PublisherExt;
pub use sequence::Sequence;
pub use sink::Sink;
pub use subject::Subject;
pub use subject_config::SubjectConfig;
pub use subscriber::Subscriber;
pub use subscriber_id::SubscriberId;
pub use subscriber_retention::SubscriberRetention;
pub use subscription::{Subscription, SubscriptionHandle};
pub use try_map::TryMap;
