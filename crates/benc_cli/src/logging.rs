use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a `Targets` filter, e.g. `benc=trace`.
const LOG_ENV: &str = "BENC_LOG";

/// Install the stderr log subscriber. Defaults to warnings only.
pub(crate) fn init() {
	let filter = std::env::var(LOG_ENV)
		.ok()
		.and_then(|spec| spec.parse::<Targets>().ok())
		.unwrap_or_else(|| Targets::new().with_default(Level::WARN));

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false)
				.with_level(true)
				.compact(),
		)
		.with(filter)
		.try_init()
		.ok();
}
