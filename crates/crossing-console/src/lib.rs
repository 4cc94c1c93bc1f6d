//! Colorful console output for search progress.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Search start and end with totals
//! - **DEBUG**: Each discovered solution
//! - **TRACE**: Each pruned crossing

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "crossing_solver=info";

/// Runner messages are always shown.
const CLI_DIRECTIVE: &str = "crossing_cli=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `crossing_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let default: Directive = match DEFAULT_DIRECTIVE.parse() {
            Ok(directive) => directive,
            Err(_) => LevelFilter::INFO.into(),
        };
        let mut filter = EnvFilter::builder()
            .with_default_directive(default)
            .from_env_lossy();
        if let Ok(directive) = CLI_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("crossing_solver") && !target.starts_with("crossing_cli") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    budget: Option<String>,
    traversal: Option<String>,
    horse_count: Option<u64>,
    group_limit: Option<u64>,
    solutions: Option<u64>,
    nodes: Option<u64>,
    pruned: Option<u64>,
    prune_rate: Option<f64>,
    max_depth: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    best_time: Option<u64>,
    total_time: Option<u64>,
    depth: Option<u64>,
    cost: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "budget" => self.budget = Some(s),
            "traversal" => self.traversal = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "horse_count" => self.horse_count = Some(value),
            "group_limit" => self.group_limit = Some(value),
            "solutions" => self.solutions = Some(value),
            "nodes" => self.nodes = Some(value),
            "pruned" => self.pruned = Some(value),
            "max_depth" => self.max_depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            "best_time" => self.best_time = Some(value),
            "total_time" => self.total_time = Some(value),
            "depth" => self.depth = Some(value),
            "cost" => self.cost = Some(value),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "prune_rate" {
            self.prune_rate = Some(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "budget" => self.budget = Some(value.to_string()),
            "traversal" => self.traversal = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "solution" => format_solution(v),
        "prune" if level == Level::TRACE => format_prune(v),
        "prune" => String::new(),
        _ => format_message(v, level),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} Searching │ {} horses │ groups of up to {} │ budget {} │ {}",
        "▶".bright_green().bold(),
        count(v.horse_count).bright_yellow(),
        count(v.group_limit).bright_yellow(),
        v.budget.as_deref().unwrap_or("unlimited").bright_magenta(),
        v.traversal.as_deref().unwrap_or("Iterative").white(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solutions = v.solutions.unwrap_or(0);
    let best = if solutions == 0 {
        "none".bright_red().bold().to_string()
    } else {
        v.best_time.unwrap_or(0).bright_green().bold().to_string()
    };

    format!(
        "{} Search complete │ {} solutions │ best {} │ {} nodes │ {} pruned ({:.1}%) │ depth {} │ {} │ {} nodes/s",
        "■".bright_cyan().bold(),
        count(v.solutions).bright_yellow(),
        best,
        count(v.nodes).white(),
        count(v.pruned).white(),
        v.prune_rate.unwrap_or(0.0) * 100.0,
        count(v.max_depth).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.speed).bright_magenta().bold(),
    )
}

fn format_solution(v: &EventVisitor) -> String {
    format!(
        "  {} solution │ time {} │ {} crossings",
        "✓".bright_green(),
        count(v.total_time).bright_white(),
        count(v.depth).white(),
    )
}

fn format_prune(v: &EventVisitor) -> String {
    format!(
        "  {} pruned at depth {} │ cost {} │ budget {}",
        "✗".bright_black(),
        count(v.depth),
        count(v.cost),
        v.budget.as_deref().unwrap_or("unlimited"),
    )
    .bright_black()
    .to_string()
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };
    match level {
        Level::ERROR => format!("{} {}", "error:".bright_red().bold(), message),
        Level::WARN => format!("{} {}", "warning:".yellow().bold(), message),
        _ => message.to_string(),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1_000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1_000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1_000)
    }
}
