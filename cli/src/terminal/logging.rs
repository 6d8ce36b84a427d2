use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prefixes every diagnostic with the level symbol instead of the stock
/// timestamp/level/target clutter.
pub struct EquiprFormatter;

impl<S, N> FormatEvent<S, N> for EquiprFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let symbol: ColoredString = match *event.metadata().level() {
            Level::TRACE => "[ ]".dimmed(),
            Level::DEBUG => "[?]".blue(),
            Level::INFO => "[+]".green().bold(),
            Level::WARN => "[*]".yellow().bold(),
            Level::ERROR => "[-]".red().bold(),
        };

        write!(writer, "{} ", symbol)?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Diagnostics go to stderr so prompts and inventory output own stdout.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    tracing_subscriber::fmt()
        .event_format(EquiprFormatter)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
