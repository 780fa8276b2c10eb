use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rondo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a storyboard into a self-contained SVG document.
    Compile(CompileArgs),
    /// Parse and validate a storyboard, printing its schedule summary.
    Validate(ValidateArgs),
    /// Probe an image source for its intrinsic size.
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input storyboard JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input storyboard JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Image path or URL.
    #[arg(long)]
    image: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Probe(args) => cmd_probe(args),
    }
}

fn read_storyboard_json(path: &Path) -> anyhow::Result<rondo::Storyboard> {
    let f = File::open(path).with_context(|| format!("open storyboard '{}'", path.display()))?;
    let r = BufReader::new(f);
    let storyboard: rondo::Storyboard =
        serde_json::from_reader(r).with_context(|| "parse storyboard JSON")?;
    Ok(storyboard)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let storyboard = read_storyboard_json(&args.in_path)?;
    storyboard.validate()?;

    let svg = rondo::compile_storyboard(&storyboard)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let storyboard = read_storyboard_json(&args.in_path)?;
    storyboard.validate()?;

    let plan = rondo::plan_storyboard(&storyboard)?;
    let fingerprint = rondo::fingerprint_plan(&plan);

    eprintln!("storyboard ok:");
    eprintln!(
        "  viewport:    {} x {}",
        rondo::fmt_num(plan.viewport.width),
        rondo::fmt_num(plan.viewport.height)
    );
    eprintln!("  layers:      {}", plan.layers.len());
    for layer in &plan.layers {
        for d in &layer.directives {
            eprintln!(
                "    {}: {} dur={} begin={} repeat={}",
                layer.label,
                d.attribute.attribute_name(),
                d.dur_attr(),
                d.begin_attr().unwrap_or_else(|| "0s".to_string()),
                d.repeat_attr(),
            );
        }
    }
    eprintln!(
        "  fingerprint: {:016x}{:016x}",
        fingerprint.hi, fingerprint.lo
    );
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let probe = rondo::probe_size(&args.image);
    let status = match probe.status {
        rondo::ProbeStatus::Loading => "loading",
        rondo::ProbeStatus::Error => "error",
        rondo::ProbeStatus::Success => "success",
    };
    eprintln!("{}:", args.image);
    eprintln!("  status: {status}");
    eprintln!(
        "  size:   {} x {}",
        rondo::fmt_num(probe.width),
        rondo::fmt_num(probe.height)
    );
    Ok(())
}
