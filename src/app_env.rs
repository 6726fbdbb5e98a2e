/// URL of the SQLite database backing the todo store. Defaults to [DEFAULT_DB_URL], which keeps
/// all data in memory for the lifetime of the process
pub const DB_URL: &str = "DATABASE_URL";
/// Socket address the HTTP server binds to. Defaults to [DEFAULT_LISTEN_ADDR]
pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
/// Log level configuration for the application. For formatting info, see [EnvFilter's documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// OpenTelemetry span export URL. Should be http://localhost:4317 by default, as the service should
/// have an OpenTelemetry collector sidecar which directs metrics to the correct place
pub const OTEL_SPAN_EXPORT_URL: &str = "OTEL_SPAN_EXPORT_URL";
/// OpenTelemetry metrics export URL. Should be http://localhost:4317 by default, as the service should
/// have an OpenTelemetry collector sidecar which directs metrics to the correct place
pub const OTEL_METRIC_EXPORT_URL: &str = "OTEL_METRIC_EXPORT_URL";

pub const DEFAULT_DB_URL: &str = "sqlite::memory:";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
