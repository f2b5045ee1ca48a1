//! Test utilities for protocol verification.
//!
//! [`RecordingSubscriber`] captures the exact event order a subscriber observes.
//! [`TestPublisher`] gives a test full control over an upstream, while its [`TestSubscription`]
//! records the raw demand and cancellation calls that reach it.

mod recorded_event;
mod recording_subscriber;
mod subject_event;
mod subscription_event;
mod test_publisher;
mod test_subscription;
mod testing_error;
mod tracking_subject;

pub use recorded_event::RecordedEvent;
pub use recording_subscriber::RecordingSubscriber;
pub use subject_event::SubjectEvent;
pub use subscription_event::SubscriptionEvent;
pub use test_publisher::TestPublisher;
pub use test_subscription::TestSubscription;
pub use testing_error::TestingError;
pub use tracking_subject::TrackingSubject;
