use colored::*;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Events with this target are written as-is, without a severity symbol.
pub const PRINT_TARGET: &str = "macshift::print";

pub struct MacshiftFormatter;

impl<S, N> FormatEvent<S, N> for MacshiftFormatter
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
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[!]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose` when set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let env: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .event_format(MacshiftFormatter)
        .with_env_filter(build_filter(verbose, env.as_deref())?)
        .with_writer(std::io::stdout)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

/// Output written through [`PRINT_TARGET`] stays visible whatever `env` asks for.
fn build_filter(verbose: bool, env: Option<&str>) -> anyhow::Result<EnvFilter> {
    let default_level: LevelFilter = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let print_directive: Directive = format!("{PRINT_TARGET}=info").parse()?;

    Ok(EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(env.unwrap_or_default())
        .add_directive(print_directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_target_survives_a_restrictive_env() {
        for env in [Some("error"), Some("off"), Some("macshift=error"), None] {
            let filter = build_filter(false, env).unwrap();
            assert!(
                filter.to_string().contains("macshift::print=info"),
                "{env:?} gave {filter}"
            );
        }
    }

    #[test]
    fn env_directives_are_kept() {
        let filter = build_filter(false, Some("warn")).unwrap().to_string();
        assert!(filter.contains("warn"), "{filter}");
    }
}
