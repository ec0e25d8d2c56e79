//! StatLab CLI — list, run and export lessons.
//!
//! Commands:
//! - `list` — lesson numbers, names and descriptions
//! - `run <lesson>` — print one lesson's report, optionally export artifacts
//! - `all` — every lesson in order
//! - `config` — print the default configuration as TOML

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use statlab_core::profiling;
use statlab_runner::{render_lesson, run_lesson, save_artifacts, LabConfig, Lesson, LessonOutput};

#[derive(Parser)]
#[command(name = "statlab", about = "StatLab CLI — statistics lessons you can rerun")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the lessons.
    List,
    /// Run one lesson (by name or number) and print its report.
    Run {
        lesson: Lesson,

        #[command(flatten)]
        opts: RunOptions,
    },
    /// Run every lesson in order.
    All {
        #[command(flatten)]
        opts: RunOptions,
    },
    /// Print the default configuration as TOML.
    Config,
}

#[derive(Args)]
struct RunOptions {
    /// Path to a TOML lab config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the master seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Write report.json and per-series CSV files under this directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also render each figure to SVG (requires --out).
    #[arg(long, default_value_t = false)]
    svg: bool,
}

fn main() -> Result<()> {
    profiling::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            list_lessons();
            Ok(())
        }
        Commands::Run { lesson, opts } => run_lessons(&[lesson], &opts),
        Commands::All { opts } => run_lessons(&Lesson::ALL, &opts),
        Commands::Config => {
            let toml = LabConfig::default()
                .to_toml_string()
                .context("failed to serialize default config")?;
            print!("{toml}");
            Ok(())
        }
    }
}

fn list_lessons() {
    for lesson in Lesson::ALL {
        println!(
            "{:>2}. {:<16} {}",
            lesson.number(),
            lesson.name(),
            lesson.description()
        );
    }
}

fn load_config(opts: &RunOptions) -> Result<LabConfig> {
    let config = match &opts.config {
        Some(path) => LabConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LabConfig::default(),
    };
    Ok(match opts.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn run_lessons(lessons: &[Lesson], opts: &RunOptions) -> Result<()> {
    if opts.svg && opts.out.is_none() {
        bail!("--svg requires --out");
    }
    let config = load_config(opts)?;

    for (i, &lesson) in lessons.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let output = run_lesson(lesson, &config)
            .with_context(|| format!("lesson `{lesson}` failed"))?;
        print_report(&output);

        if let Some(dir) = &opts.out {
            write_outputs(&output, dir, opts.svg)?;
        }
    }
    Ok(())
}

fn print_report(output: &LessonOutput) {
    let lesson = output.lesson;
    println!("=== {}. {} (seed {}) ===", lesson.number(), lesson.title(), output.seed);
    print!("{}", output.report);
}

fn write_outputs(output: &LessonOutput, dir: &Path, svg: bool) -> Result<()> {
    let lesson_dir = save_artifacts(output, dir)
        .with_context(|| format!("failed to save artifacts under {}", dir.display()))?;
    println!("Artifacts saved to: {}", lesson_dir.display());

    if svg {
        let files = render_lesson(output, &lesson_dir)
            .with_context(|| format!("failed to render {}", output.lesson))?;
        for file in files {
            println!("  {}", file.display());
        }
    }
    Ok(())
}
