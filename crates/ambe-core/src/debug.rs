use core::fmt;
use std::fs::OpenOptions;
use std::sync::Once;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt as tracingfmt};

/// if `cond` is false, logs a warning with your message.
#[macro_export]
macro_rules! assert_warn {
    ($cond:expr, $($arg:tt)+) => {{
        if !$cond {
            tracing::warn!(
                target: module_path!(),
                "assertion warning: `{}` failed: {} at {}:{}",
                stringify!($cond),
                format_args!($($arg)+),
                file!(),
                line!(),
            );
        }
    }};
}

struct AlignedFormatter;

/// Transform a source path such as "crates/ambe-codec/src/components/golay.rs"
/// into "[codec/components] golay.rs"
fn format_source_path(file_path: &str) -> String {
    let Some(src_idx) = file_path.find("/src/") else {
        return file_path.to_string();
    };
    let before_src = &file_path[..src_idx];
    let after_src = &file_path[src_idx + 5..];

    let crate_name = if let Some(ambe_idx) = before_src.rfind("ambe-") {
        &before_src[ambe_idx + 5..]
    } else {
        before_src.rsplit('/').next().unwrap_or("unknown")
    };

    match after_src.rfind('/') {
        Some(last_slash) => {
            let first_module = after_src[..last_slash].split('/').next().unwrap_or("");
            format!("[{}/{}] {}", crate_name, first_module, &after_src[last_slash + 1..])
        }
        None => format!("[{}] {}", crate_name, after_src),
    }
}

impl<S, N> FormatEvent<S, N> for AlignedFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: format::Writer<'_>, event: &tracing::Event<'_>) -> fmt::Result {
        let metadata = event.metadata();

        let (color_level, color_reset) = match *metadata.level() {
            tracing::Level::ERROR => ("\x1b[31m", "\x1b[0m"),
            tracing::Level::WARN => ("\x1b[33m", "\x1b[0m"),
            tracing::Level::INFO => ("\x1b[32m", "\x1b[0m"),
            tracing::Level::DEBUG => ("\x1b[34m", "\x1b[0m"),
            tracing::Level::TRACE => ("\x1b[35m", "\x1b[0m"),
        };

        // Format: "LEVEL [crate/module] file:line: message"
        let location = format!(
            "{}{:<5}{} {}:{}:",
            color_level,
            metadata.level(),
            color_reset,
            format_source_path(metadata.file().unwrap_or("unknown")),
            metadata.line().unwrap_or(0)
        );

        let mut message_buf = String::new();
        ctx.field_format().format_fields(format::Writer::new(&mut message_buf), event)?;

        write!(writer, "{:<width$} {}", location, message_buf, width = 60)?;
        writeln!(writer)
    }
}

static INIT_LOG: Once = Once::new();

/// Sets up logging with maximum verbosity (trace level)
/// Mainly for unit tests
pub fn setup_logging_verbose() {
    setup_logging(EnvFilter::new("trace"), None);
}

/// Sets up default logging to stderr and optionally, a verbose log file
/// Returns a guard, that needs to be kept alive for logging to file to work
pub fn setup_logging_default(verbose_logfile: Option<String>) -> Option<WorkerGuard> {
    let logfile_and_filter = verbose_logfile.map(|file| (file, get_default_logfile_filter()));
    setup_logging(get_default_stdout_filter(), logfile_and_filter)
}

pub fn get_default_stdout_filter() -> EnvFilter {
    EnvFilter::new("info")
        // Hide per-frame dumps from the codec stages
        .add_directive("ambe_core::bitbuffer=warn".parse().unwrap())
        .add_directive("ambe_codec::components=info".parse().unwrap())
        .add_directive("ambe_codec::errorcontrol=info".parse().unwrap())

        // Tool and config
        .add_directive("ambe_config=debug".parse().unwrap())
        .add_directive("ambe_tool=debug".parse().unwrap())
}

fn get_default_logfile_filter() -> EnvFilter {
    EnvFilter::new("trace")
}

/// Sets up logging to stderr and optionally, a verbose log file
/// If an output file is requested, returns Some<WorkerGuard>. Keep this value alive
/// or logging to file may cease working. If no output file is provided, returns None.
/// If the log file cannot be opened, logging continues on stderr only.
fn setup_logging(stdout_filter: EnvFilter, outfile: Option<(String, EnvFilter)>) -> Option<WorkerGuard> {
    let file = outfile.and_then(|(path, filter)| {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(f) => Some((f, filter)),
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", path, e);
                None
            }
        }
    });

    if let Some((file, outfile_filter)) = file {
        let (file_writer, guard) = tracing_appender::non_blocking(file);

        // Setup once
        INIT_LOG.call_once(|| {
            let file_layer = tracingfmt::layer()
                .event_format(AlignedFormatter)
                .with_writer(file_writer)
                .with_ansi(false);
            let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter).with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(file_layer.with_filter(outfile_filter))
                .with(stdout_layer.with_filter(stdout_filter))
                .init();
        });

        Some(guard)
    } else {
        // Setup once
        INIT_LOG.call_once(|| {
            let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter).with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(stdout_layer.with_filter(stdout_filter))
                .init();
        });
        None
    }
}
