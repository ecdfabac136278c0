mod io;
mod session;
mod slider;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use rasterfx::{
    ChannelPolicy, Filter, FilterContext, FilterKind, FilterSettings, FilterSpec, ThresholdMode,
    parse_filter,
};

use crate::session::{Param, Session};

#[derive(Parser, Debug)]
#[command(name = "rasterfx", version)]
struct Cli {
    /// Log filter spans and chain steps at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply one filter to an image.
    Apply(ApplyArgs),
    /// Apply a JSON list of filters in order.
    Chain(ChainArgs),
}

#[derive(Parser, Debug)]
struct EngineArgs {
    /// JSON settings file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store policy for out-of-range channel values.
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Partition convolution rows across worker threads.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Rayon worker threads; implies `--parallel`.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// Filter name: none, threshold, saturation, lowpass.
    #[arg(long, default_value = "none")]
    filter: String,

    /// Filter parameter, used as-is.
    #[arg(long, conflicts_with = "slider", allow_negative_numbers = true)]
    value: Option<f64>,

    /// Slider position (0-255), discretized per filter.
    #[arg(long)]
    slider: Option<u8>,

    /// Threshold comparison mode (threshold only; default per-channel).
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Parser, Debug)]
struct ChainArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// JSON array of `{ "kind": ..., "params": { ... } }` filter specs.
    #[arg(long)]
    spec: PathBuf,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Clamp,
    Wrap,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    PerChannel,
    Luma,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Chain(args) => cmd_chain(args),
    }
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let ctx = build_context(&args.engine)?;
    let kind: FilterKind = args.filter.parse()?;
    if args.mode.is_some() && kind != FilterKind::Threshold {
        anyhow::bail!("--mode only applies to the threshold filter, not '{kind}'");
    }

    let mut sess = Session::new(kind);
    sess.load(io::load_image(&args.in_path)?);
    sess.set_param(match (args.value, args.slider) {
        (Some(v), _) => Param::Value(v),
        (None, Some(pos)) => Param::Slider(pos),
        (None, None) => Param::Default,
    });
    if let Some(mode) = args.mode {
        sess.set_threshold_mode(match mode {
            ModeArg::PerChannel => ThresholdMode::PerChannel,
            ModeArg::Luma => ThresholdMode::Luma,
        });
    }
    let filter = sess.filter()?;
    tracing::debug!(?filter, "resolved filter");

    let out = sess
        .render(&ctx)?
        .context("no image loaded; nothing to render")?;
    write_output(&args.out, &out)
}

fn cmd_chain(args: ChainArgs) -> anyhow::Result<()> {
    let ctx = build_context(&args.engine)?;

    let doc = std::fs::read_to_string(&args.spec)
        .with_context(|| format!("read chain spec '{}'", args.spec.display()))?;
    let specs: Vec<FilterSpec> = serde_json::from_str(&doc)
        .with_context(|| format!("parse chain spec '{}'", args.spec.display()))?;
    let filters = specs
        .iter()
        .enumerate()
        .map(|(i, s)| parse_filter(s).with_context(|| format!("filter #{i} ('{}')", s.kind)))
        .collect::<anyhow::Result<Vec<Filter>>>()?;

    let src = io::load_image(&args.in_path)?;
    let out = ctx.apply_chain(&filters, &src)?;
    write_output(&args.out, &out)
}

fn build_context(args: &EngineArgs) -> anyhow::Result<FilterContext> {
    Ok(FilterContext::new(engine_settings(args)?)?)
}

/// Settings file (if any) overridden by command-line flags.
fn engine_settings(args: &EngineArgs) -> anyhow::Result<FilterSettings> {
    let mut settings = match &args.config {
        Some(path) => FilterSettings::from_path(path)?,
        None => FilterSettings::default(),
    };
    if let Some(policy) = args.policy {
        settings.channel_policy = match policy {
            PolicyArg::Clamp => ChannelPolicy::Clamp,
            PolicyArg::Wrap => ChannelPolicy::Wrap,
        };
    }
    if args.parallel {
        settings.parallel = true;
    }
    if let Some(n) = args.threads {
        settings.threads = Some(n);
        settings.parallel = true;
    }
    if settings.threads.is_some() && !settings.parallel {
        tracing::warn!("'threads' is set but parallel mode is off; running sequentially");
    }
    Ok(settings)
}

fn write_output(path: &Path, buf: &rasterfx::PixelBuffer) -> anyhow::Result<()> {
    io::save_image(path, buf)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
