//! Ames Housing CLI Module
//!
//! Terminal front-end: the data table, correlation and missing-value
//! analyses, and the price estimator, as subcommands or an interactive menu.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::time::Instant;

use crate::analysis::{self, CorrelationEntry, MissingEntry, Severity};
use crate::config::{AppConfig, DisplayConfig};
use crate::context::AppContext;
use crate::dataset::{HousingDataset, TARGET_COLUMN};
use crate::estimator::{Feature, FeatureInput, PriceEstimate, Strategy};
use crate::labels;
use crate::session::PredictionSession;

// ─── Styling helpers ───────────────────────────────────────────────────────────

const CELL: usize = 14; // table cell width
const BAR: usize = 30; // chart bar width
const IMPORTANCE_SCALE: f64 = 20.0;

fn dim(s: &str) -> ColoredString    { s.truecolor(100, 100, 100) }
fn accent(s: &str) -> ColoredString { s.truecolor(120, 170, 255) }
fn muted(s: &str) -> ColoredString  { s.truecolor(140, 140, 140) }
fn ok(s: &str) -> ColoredString     { s.truecolor(100, 210, 120) }
fn amber(s: &str) -> ColoredString  { s.truecolor(255, 191, 0) }
fn alert(s: &str) -> ColoredString  { s.truecolor(240, 100, 100) }

fn step_run(msg: &str) {
    eprint!("  {} {}... ", accent("›"), msg);
}

fn step_done(detail: &str) {
    eprintln!("{} {}", ok("done"), dim(detail));
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", dim(&"─".repeat(56)));
}

fn wait_enter() {
    println!();
    println!("  {}", dim("press enter to continue"));
    let mut input = String::new();
    let _ = std::io::stdin().read_line(&mut input);
}

/// Terminal columns taken by `s`; East Asian wide characters count double
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| match c as u32 {
            0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60 | 0xFFE0..=0xFFE6 => 2,
            _ => 1,
        })
        .sum()
}

/// Cut or pad `s` to exactly `width` terminal columns
fn fit(s: &str, width: usize) -> String {
    let full = display_width(s);
    if full <= width {
        return format!("{}{}", s, " ".repeat(width - full));
    }

    let room = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = display_width(c.encode_utf8(&mut [0; 4]));
        if used + w > room {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// `$257,000.00`
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// `█` repeated ⌊importance × 20⌋ times
pub fn importance_bar(importance: f64) -> String {
    let n = (importance * IMPORTANCE_SCALE).floor().max(0.0) as usize;
    "█".repeat(n)
}

fn bar(fraction: f64) -> String {
    let n = (fraction.clamp(0.0, 1.0) * BAR as f64).round() as usize;
    format!("{}{}", "█".repeat(n), "░".repeat(BAR - n))
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "ames-housing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explore the Ames Housing dataset and estimate sale prices")]
#[command(long_about = None)]
pub struct Cli {
    /// Dataset CSV; disables the fallback search
    #[arg(long, global = true, env = "AMES_DATA")]
    pub data: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true, env = "AMES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Estimation strategy
    #[arg(long, global = true, value_enum, env = "AMES_STRATEGY")]
    pub strategy: Option<Strategy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preview the dataset with translated headers and values
    Table {
        /// Number of rows to show
        #[arg(short, long)]
        rows: Option<usize>,

        /// Columns to show (comma separated); all when omitted
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// Rank numeric columns by correlation with the sale price
    Correlations {
        /// Number of columns to show
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// List columns with missing values
    Missing {
        /// Number of columns to chart
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Estimate a sale price
    Predict {
        /// Above-ground living area (sq ft)
        #[arg(long, default_value = "1500", allow_hyphen_values = true)]
        area: String,

        /// Year built
        #[arg(long, default_value = "2000", allow_hyphen_values = true)]
        year_built: String,

        /// Total basement area (sq ft)
        #[arg(long, default_value = "800", allow_hyphen_values = true)]
        basement_area: String,

        /// Overall quality (1-10)
        #[arg(long, default_value = "5", allow_hyphen_values = true)]
        quality: String,

        /// Garage capacity in cars
        #[arg(long, default_value = "2", allow_hyphen_values = true)]
        garage_cars: String,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show dataset shape and per-column types and null counts
    Info,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn app_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(path) = &self.data {
            config = config.with_data_path(path.clone());
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }

        Ok(config)
    }
}

// ─── Loading ───────────────────────────────────────────────────────────────────

pub fn load_dataset(config: &AppConfig) -> anyhow::Result<HousingDataset> {
    step_run("Loading data");
    let start = Instant::now();
    let dataset = HousingDataset::locate_and_load(&config.dataset)?;
    step_done(&format!(
        "{} rows × {} cols in {:?}",
        dataset.height(),
        dataset.width(),
        start.elapsed()
    ));
    Ok(dataset)
}

pub fn load_context(config: AppConfig) -> anyhow::Result<AppContext> {
    let dataset = load_dataset(&config)?;

    step_run(&format!("Preparing {} estimator", config.estimator.strategy.to_string().cyan()));
    let start = Instant::now();
    let context = AppContext::with_dataset(config, dataset)?;
    step_done(&format!("{:?}", start.elapsed()));

    Ok(context)
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_table(dataset: &HousingDataset, rows: usize, columns: &[String]) -> anyhow::Result<()> {
    section("Data");

    let all = dataset.column_names();
    let selected: Vec<usize> = if columns.is_empty() {
        (0..all.len()).collect()
    } else {
        columns
            .iter()
            .map(|name| {
                all.iter()
                    .position(|c| c == name)
                    .ok_or_else(|| anyhow::anyhow!("no column named {}", name))
            })
            .collect::<anyhow::Result<_>>()?
    };

    let preview = dataset.preview(rows)?;

    let header: String = selected
        .iter()
        .map(|&i| fit(&labels::display_column(&all[i]), CELL))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {}", header.white().bold());
    println!("  {}", dim(&"─".repeat(selected.len() * (CELL + 1))));

    for row in &preview {
        let line: Vec<String> = selected
            .iter()
            .map(|&i| {
                let text = fit(&labels::display_value(row[i].as_deref()), CELL);
                if row[i].is_none() {
                    muted(&text).to_string()
                } else {
                    text
                }
            })
            .collect();
        println!("  {}", line.join(" "));
    }

    println!();
    println!(
        "  {}",
        dim(&format!("{} of {} rows · {} of {} columns", preview.len(), dataset.height(), selected.len(), all.len()))
    );
    println!();
    Ok(())
}

fn print_correlations(entries: &[CorrelationEntry]) {
    section("Correlation with SalePrice");

    println!(
        "  {:<4} {} {:>8}  {}",
        muted("#"),
        muted(&fit("Column", 36)),
        muted("r"),
        muted("n")
    );
    println!("  {}", dim(&"─".repeat(56)));

    for (rank, entry) in entries.iter().enumerate() {
        let name = fit(&labels::display_column(&entry.column), 36);
        let coefficient = format!("{:>8.3}", entry.coefficient);
        let coefficient = if entry.is_strong() {
            amber(&coefficient).bold()
        } else {
            coefficient.white()
        };
        println!("  {:<4} {} {}  {}", rank + 1, name, coefficient, dim(&entry.observations.to_string()));
    }

    println!();
    for entry in entries {
        let painted = if entry.is_strong() {
            amber(&bar(entry.coefficient.abs()))
        } else {
            accent(&bar(entry.coefficient.abs()))
        };
        println!("  {} {}", fit(&entry.column, 14), painted);
    }

    let strong = entries.iter().filter(|e| e.is_strong()).count();
    println!();
    println!(
        "  {} {}",
        amber("■"),
        muted(&format!(
            "{} strong (r > {:.1})",
            strong,
            analysis::STRONG_CORRELATION
        ))
    );
    println!();
}

pub fn cmd_correlations(dataset: &HousingDataset, top: usize) -> anyhow::Result<()> {
    let entries = analysis::correlate_with(dataset, TARGET_COLUMN, top)?;
    print_correlations(&entries);
    Ok(())
}

fn paint_severity(s: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::High => alert(s),
        Severity::Medium => amber(s),
        Severity::Low => ok(s),
    }
}

fn print_missing(entries: &[MissingEntry], top: usize) {
    section("Missing values");

    if entries.is_empty() {
        println!("  {}", ok("no missing values"));
        println!();
        return;
    }

    let max = entries.first().map(|e| e.count).unwrap_or(1).max(1);
    for entry in entries.iter().take(top) {
        println!(
            "  {} {}",
            fit(&entry.column, 14),
            paint_severity(&bar(entry.count as f64 / max as f64), entry.severity)
        );
    }

    println!();
    println!("  {} {} {:>7}", muted(&fit("Column", 36)), muted(&format!("{:>6}", "Count")), muted("Share"));
    println!("  {}", dim(&"─".repeat(56)));
    for entry in entries {
        println!(
            "  {} {} {:>6.1}%",
            fit(&labels::display_column(&entry.column), 36),
            paint_severity(&format!("{:>6}", entry.count), entry.severity),
            entry.share * 100.0
        );
    }

    println!();
    println!(
        "  {} {}   {} {}   {} {}",
        alert("■"),
        muted("> 1000"),
        amber("■"),
        muted("> 100"),
        ok("■"),
        muted("≤ 100")
    );
    println!();
}

pub fn cmd_missing(dataset: &HousingDataset, top: usize) -> anyhow::Result<()> {
    print_missing(&analysis::missing_values(dataset), top);
    Ok(())
}

fn print_estimate(estimate: &PriceEstimate, strategy: &str) {
    println!();
    println!("  {} {}", muted("予想価格:"), ok(&format_price(estimate.price)).bold());
    println!();
    println!("  {}", "AI決定の重要度 (Feature Importance)".white().bold());
    println!("  {}", dim(&format!("model: {}", strategy)));
    println!();
    for (feature, importance) in estimate.importances.iter() {
        println!(
            "  {} {} ({:.1}%)",
            fit(feature.caption(), 12),
            accent(&importance_bar(importance)),
            importance * 100.0
        );
    }
    println!();
}

pub fn cmd_predict(context: &AppContext, input: &FeatureInput, json: bool) -> anyhow::Result<()> {
    let estimate = context.estimate_input(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    section("Prediction");
    for feature in Feature::ALL {
        println!("  {:<28} {}", muted(&labels::display_column(feature.column())), input.get(feature).trim());
    }
    print_estimate(&estimate, context.estimator().strategy_name());
    Ok(())
}

pub fn cmd_info(dataset: &HousingDataset) -> anyhow::Result<()> {
    section("Data Info");

    if let Some(path) = dataset.source() {
        println!("  {:<12} {}", muted("File"), path.display());
    }
    println!("  {:<12} {}", muted("Rows"), dataset.height());
    println!("  {:<12} {}", muted("Columns"), dataset.width());
    println!("  {:<12} {}", muted("Numeric"), dataset.numeric_column_names().len());
    println!(
        "  {:<12} {:.1}%",
        muted("Missing"),
        analysis::missing_ratio(dataset) * 100.0
    );
    println!();

    println!("  {} {:<10} {:>6}", muted(&fit("Column", 36)), muted("Type"), muted("Nulls"));
    println!("  {}", dim(&"─".repeat(56)));

    for column in dataset.summary() {
        let nulls = format!("{:>6}", column.null_count);
        println!(
            "  {} {:<10} {}",
            fit(&labels::display_column(&column.name), 36),
            column.dtype.truecolor(140, 140, 140),
            if column.null_count > 0 { amber(&nulls) } else { nulls.normal() }
        );
    }

    println!();
    Ok(())
}

// ─── Interactive mode ──────────────────────────────────────────────────────────

fn print_banner(context: &AppContext) {
    println!();
    println!();
    println!("       {}", "Ames Housing".truecolor(120, 170, 255).bold());
    println!("       {}", "米国アイオワ州エイムズ 住宅価格データ".truecolor(100, 150, 240));
    println!();
    println!(
        "       {}",
        dim(&format!(
            "{} rows  ·  {} cols  ·  {}  ·  v{}",
            context.dataset().height(),
            context.dataset().width(),
            context.estimator().strategy_name(),
            env!("CARGO_PKG_VERSION")
        ))
    );
    println!();
}

fn theme() -> dialoguer::theme::ColorfulTheme {
    use dialoguer::console::{style, Style};

    dialoguer::theme::ColorfulTheme {
        active_item_prefix: style("  ›".to_string()).for_stderr().cyan(),
        active_item_style: Style::new().for_stderr().white().bold(),
        inactive_item_prefix: style("   ".to_string()).for_stderr(),
        inactive_item_style: Style::new().for_stderr().color256(245),
        prompt_prefix: style("  ?".to_string()).for_stderr().color256(111),
        prompt_style: Style::new().for_stderr().white().bold(),
        ..dialoguer::theme::ColorfulTheme::default()
    }
}

fn prompt_label(feature: Feature) -> &'static str {
    match feature {
        Feature::Area => "居住面積 (sq ft)",
        Feature::YearBuilt => "建築年 (西暦)",
        Feature::OverallQuality => "全体的な品質 (1-10)",
        Feature::GarageCars => "ガレージ収容台数 (0-4)",
        Feature::BasementArea => "地下室面積 (sq ft)",
    }
}

/// Prompt order of the prediction screen
const PROMPT_ORDER: [Feature; 5] = [
    Feature::Area,
    Feature::YearBuilt,
    Feature::BasementArea,
    Feature::OverallQuality,
    Feature::GarageCars,
];

fn prediction_screen(
    context: &AppContext,
    session: &mut PredictionSession,
    theme: &dialoguer::theme::ColorfulTheme,
) -> anyhow::Result<()> {
    use dialoguer::Input;

    section("Prediction");

    loop {
        let mut input = session.next_defaults();
        for feature in PROMPT_ORDER {
            let value: String = Input::with_theme(theme)
                .with_prompt(prompt_label(feature))
                .default(input.get(feature).to_string())
                .interact_text()?;
            input.set(feature, value);
        }

        match session.submit(context, &input) {
            Ok(estimate) => {
                print_estimate(estimate, context.estimator().strategy_name());
                return Ok(());
            }
            Err(err) if err.is_recoverable() => {
                println!();
                println!("  {} {}", alert("数値を正しく入力してください"), dim(&err.to_string()));
                println!();
            }
            Err(err) => return Err(err.into()),
        }
    }
}

pub fn cmd_interactive(context: &AppContext) -> anyhow::Result<()> {
    use dialoguer::Select;

    print_banner(context);

    let theme = theme();
    let display: &DisplayConfig = &context.config().display;
    let mut session = PredictionSession::new();

    loop {
        let items = &[
            "Data                  dataset preview",
            "Analysis              correlation with sale price",
            "Prediction            estimate a sale price",
            "Missing values        columns with gaps",
            "Exit",
        ];

        println!();
        let sel = Select::with_theme(&theme)
            .with_prompt("What would you like to do")
            .items(items)
            .default(0)
            .interact_opt()?;

        match sel {
            Some(0) => {
                cmd_table(context.dataset(), display.preview_rows, &[])?;
                wait_enter();
            }
            Some(1) => {
                print_correlations(&context.correlations()?);
                wait_enter();
            }
            Some(2) => {
                prediction_screen(context, &mut session, &theme)?;
                wait_enter();
            }
            Some(3) => {
                print_missing(&context.missing_values(), display.top_missing);
                wait_enter();
            }
            Some(4) | None => {
                tracing::debug!(
                    submissions = session.submissions(),
                    rejected = session.rejected(),
                    "leaving interactive mode"
                );
                println!();
                println!("  {}", dim("goodbye"));
                println!();
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
