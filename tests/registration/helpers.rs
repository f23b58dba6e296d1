//! tests/registration/helpers.rs

use once_cell::sync::Lazy;
use signup::registration::RegistrationForm;
use signup::telemetry::{get_subscriber, init_subscriber};
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`, hence the
    // two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn valid_form() -> RegistrationForm {
    RegistrationForm::new("A very long user name", "foo@bar.com", "!!pass!!!")
}

pub fn short_name_form() -> RegistrationForm {
    RegistrationForm::new("too short", "foo@bar.com", "!!pass!!!")
}

/// Records the message of every event emitted while it is installed.
#[derive(Clone, Default)]
struct EventMessages(Arc<Mutex<Vec<String>>>);

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for EventMessages {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.0.lock().unwrap().push(message);
        }
    }
}

/// Run `f` with a thread-local subscriber and return every event message
/// it logged, debug level included.
pub fn capture_event_messages<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let messages = EventMessages::default();
    let subscriber = Registry::default().with(messages.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    let captured = messages.0.lock().unwrap().clone();
    (output, captured)
}
