use anyhow::Result;
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber, error};
use tracing_subscriber::{
    EnvFilter,
    Layer, // for .with_filter() on the stdout layer
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

// --- Formatter ---

/// `<local timestamp> <LEVEL> <file:line> <fields>`, colored on a terminal.
struct LocalTimeFormat;

impl<S, N> FormatEvent<S, N> for LocalTimeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            let color = match *meta.level() {
                Level::ERROR => "\x1b[1;31m",
                Level::WARN => "\x1b[1;33m",
                Level::INFO => "\x1b[1;32m",
                Level::DEBUG => "\x1b[1;34m",
                Level::TRACE => "\x1b[1;35m",
            };
            write!(writer, "\x1b[2m{timestamp}\x1b[0m {color}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .strip_prefix("src/")
                .or_else(|| file.strip_prefix("src\\"))
                .unwrap_or(file);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file that can be opened after start-up ---

#[derive(Clone)]
struct LogFile(Arc<Mutex<Option<File>>>);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Handles kept after init ---

type ReloadFn<T> = Box<dyn Fn(T) -> Result<()> + Send + Sync>;

static LEVEL_RELOAD: OnceLock<ReloadFn<String>> = OnceLock::new();
static STDOUT_RELOAD: OnceLock<ReloadFn<bool>> = OnceLock::new();
static LOG_FILE: OnceLock<Arc<Mutex<Option<File>>>> = OnceLock::new();

fn keep_reload_handle<S, T>(
    slot: &OnceLock<ReloadFn<T>>,
    handle: reload::Handle<EnvFilter, S>,
    to_filter: fn(T) -> Result<EnvFilter>,
) where
    S: Subscriber + Send + Sync + 'static,
    T: 'static,
{
    let _ = slot.set(Box::new(move |value: T| {
        let filter = to_filter(value)?;
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("log filter reload failed: {e}"))
    }));
}

fn level_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| anyhow::anyhow!("invalid log level '{directive}': {e}"))
}

// --- Public API ---

/// Installs the global subscriber. Call once at startup.
///
/// `RUST_LOG` wins over `default_level` when set. Stdout output is colored on
/// a terminal; the file layer discards everything until
/// [`enable_file_logging`] is called.
pub fn init_logging(default_level: &str) {
    let file_inner: Arc<Mutex<Option<File>>> = Arc::new(Mutex::new(None));
    let _ = LOG_FILE.set(file_inner.clone());

    let initial = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (level_layer, level_handle) = reload::Layer::new(initial);
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(false)
        .with_writer(LogFile(file_inner));

    if tracing_subscriber::registry()
        .with(level_layer)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        keep_reload_handle(&LEVEL_RELOAD, level_handle, |directive: String| {
            level_filter(&directive)
        });
        keep_reload_handle(&STDOUT_RELOAD, stdout_handle, |enabled: bool| {
            Ok(EnvFilter::new(if enabled { "trace" } else { "off" }))
        });
    }
}

/// Replaces the active filter, e.g. `"debug"` or `"lab_core=trace,info"`.
pub fn set_log_level(directive: &str) -> Result<()> {
    match LEVEL_RELOAD.get() {
        Some(reload) => reload(directive.to_string()),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Turns stdout output on or off; the log file is unaffected.
///
/// The terminal UI switches stdout off so log lines do not land on its screen.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    match STDOUT_RELOAD.get() {
        Some(reload) => reload(enabled),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Appends log output to `path`, replacing any file opened earlier.
/// The parent directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match LOG_FILE.get() {
        Some(slot) => {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
            Ok(())
        }
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Logs a failed user action instead of dropping it.
pub fn log_failure(
    action: &'static str,
    result: Result<()>,
) {
    if let Err(error) = result {
        error!(action, ?error, "action failed");
    }
}
