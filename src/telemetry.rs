use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt};

pub fn get_subscriber<Sink>(env_filter: &str, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // `RUST_LOG` wins over the configured level. Extractor rejections are only
                // visible when the filter includes `axum::rejection=trace`.
                env_filter.into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(sink))
}
