// File: crates/demo/src/main.rs
// Summary: Headless demo: ticks the driver on a fixed interval and writes PNG frames of the grapher.

use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use grapher_core::{SpeedGrapher, TickOutcome};
use speed_grapher_demo::{init_tracing, RunArgs};

#[derive(Parser, Debug)]
#[command(name = "speed-grapher-demo", about = "Feed a SpeedGrapher on a timer and save frames as PNG")]
struct Cli {
    #[command(flatten)]
    run: RunArgs,

    /// Directory receiving the PNG frames.
    #[arg(long = "out-dir", default_value = "target/out")]
    out_dir: PathBuf,

    /// Save a frame every N fed points (0 saves only the final frame).
    #[arg(long, default_value_t = 100)]
    every: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut grapher = SpeedGrapher::raster(cli.run.grapher_options()).context("creating raster surface")?;
    cli.run.apply_styles(grapher.style_mut())?;
    let mut driver = cli.run.build_driver()?;
    tracing::info!(
        points = driver.values().len(),
        interval_ms = driver.interval().as_millis() as u64,
        out_dir = %cli.out_dir.display(),
        "starting demo"
    );

    loop {
        match driver.tick(&mut grapher) {
            TickOutcome::Fed { index, progress } => {
                if cli.every > 0 && (index + 1) % cli.every == 0 {
                    let out = cli.out_dir.join(format!("frame_{:05}.png", index + 1));
                    grapher.surface_mut().write_png(&out)
                        .with_context(|| format!("writing {}", out.display()))?;
                    tracing::info!(progress = %format!("{:.0}%", progress * 100.0), "wrote {}", out.display());
                }
            }
            TickOutcome::Settled => {
                let out = cli.out_dir.join("final.png");
                grapher.surface_mut().write_png(&out)
                    .with_context(|| format!("writing {}", out.display()))?;
                tracing::info!("wrote {}", out.display());
                break;
            }
            TickOutcome::Idle => break,
        }
        if !driver.interval().is_zero() {
            thread::sleep(driver.interval());
        }
    }
    Ok(())
}
