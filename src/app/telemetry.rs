use tracing::{subscriber::set_global_default, Subscriber};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Creates a subscriber writing to stderr so prompts and results on stdout stay clean.
/// `RUST_LOG` overrides `default_filter` when set.
pub(crate) fn get_subscriber(default_filter: &str) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    Registry::default().with(env_filter).with(fmt_layer)
}

pub(crate) fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> color_eyre::Result<()> {
    set_global_default(subscriber)?;
    Ok(())
}
