use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Output layout selected by `logging.format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    /// Plain single-line text, used for unrecognised names
    Text,
}

impl LogFormat {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Text,
        }
    }
}

fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Build a subscriber for the configured format writing to `writer`
pub fn build_subscriber<W>(
    settings: &LoggingSettings,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(writer)
        .with_target(false)
        .with_level(true);

    match LogFormat::from_name(&settings.format) {
        LogFormat::Json => Box::new(builder.json().finish()),
        LogFormat::Pretty => Box::new(builder.pretty().finish()),
        LogFormat::Text => Box::new(builder.finish()),
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set. Returns `false` when
/// a subscriber was already installed.
pub fn init_logging(settings: &LoggingSettings) -> bool {
    tracing::subscriber::set_global_default(build_subscriber(settings, std::io::stdout)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(LogFormat::from_name("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_name(" Pretty "), LogFormat::Pretty);
        assert_eq!(LogFormat::from_name("compact"), LogFormat::Text);
    }

    #[test]
    fn test_json_format_writes_json_lines() {
        let settings = LoggingSettings::default();
        assert_eq!(LogFormat::from_name(&settings.format), LogFormat::Json);

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = build_subscriber(&settings, move || writer.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(seeker = "s1", "No providers passed");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let line = output.lines().next().expect("one log line");
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["level"], "WARN");
        assert_eq!(event["fields"]["message"], "No providers passed");
        assert_eq!(event["fields"]["seeker"], "s1");
    }

    #[test]
    fn test_second_init_is_harmless() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };
        init_logging(&settings);
        assert!(!init_logging(&settings));
    }
}
