use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortviz::prelude::*;
use sortviz::{hud, screenshot};

#[derive(Parser)]
#[command(name = "sortviz")]
#[command(about = "Animated step-by-step sorting visualizer")]
struct Args {
    /// TOML config file; the flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of elements (10-200)
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// bubble, insertion, selection, quick or merge
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Sort in descending order
    #[arg(long)]
    descending: bool,

    /// Animation speed (1-100)
    #[arg(short, long)]
    speed: Option<u32>,

    /// Seed for the random array
    #[arg(long)]
    seed: Option<u64>,

    /// Start sorting immediately
    #[arg(long)]
    start: bool,

    /// Run to completion without a window and print the stats
    #[arg(long)]
    headless: bool,

    /// Write every step as a JSON line (headless only)
    #[arg(long, requires = "headless")]
    trace: Option<PathBuf>,

    /// Render the final frame to an image (headless only)
    #[arg(long, requires = "headless")]
    screenshot: Option<PathBuf>,

    /// Frame width for --screenshot
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Frame height for --screenshot
    #[arg(long, default_value_t = 300)]
    height: u32,
}

impl Args {
    fn resolve_config(&self) -> Result<VisualizerConfig> {
        let mut config = match &self.config {
            Some(path) => VisualizerConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => VisualizerConfig::default(),
        };
        if let Some(size) = self.size {
            config.array_size = size;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if self.descending {
            config.ascending = false;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        config.running |= self.start;
        config.validate().context("Invalid settings")?;
        Ok(config)
    }
}

/// One line of the step trace.
#[derive(Serialize)]
struct TraceLine<'a> {
    step: u64,
    array: &'a [u32],
    comparing: &'a [usize],
    sorted: &'a [usize],
    done: bool,
}

impl<'a> TraceLine<'a> {
    fn of(driver: &'a Driver, done: bool) -> Self {
        Self {
            step: driver.stats().steps(),
            array: driver.array(),
            comparing: driver.comparing(),
            sorted: driver.sorted(),
            done,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortviz=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    let driver = match args.seed {
        Some(seed) => Driver::with_seed(config, seed),
        None => Driver::new(config),
    };

    if args.headless {
        run_headless(driver, &args)
    } else {
        run_windowed(driver)
    }
}

fn run_headless(mut driver: Driver, args: &Args) -> Result<()> {
    let mut trace = match &args.trace {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => None,
    };

    driver.apply(ConfigChange::Running(true));
    loop {
        let outcome = driver.tick(Instant::now());
        if let Some(out) = trace.as_mut() {
            if outcome != TickOutcome::Idle {
                let line = TraceLine::of(&driver, outcome == TickOutcome::Finished);
                serde_json::to_writer(&mut *out, &line)?;
                out.write_all(b"\n")?;
            }
        }
        if outcome != TickOutcome::Stepped {
            break;
        }
    }
    if let Some(mut out) = trace {
        out.flush()?;
    }
    info!(
        algorithm = %driver.config().algorithm,
        steps = driver.stats().steps(),
        "headless run complete"
    );

    if let Some(path) = &args.screenshot {
        save_frame(&driver, path, args.width, args.height)?;
    }

    println!("{}", hud::title(driver.config(), driver.stats()));
    Ok(())
}

fn save_frame(driver: &Driver, path: &Path, width: u32, height: u32) -> Result<()> {
    let mut renderer = Renderer::new(width, height);
    draw_frame(&mut renderer, FrameView::from(driver));
    screenshot::save_png(path, renderer.pixels(), width, height)
        .with_context(|| format!("Failed to save {}", path.display()))
}

#[cfg(feature = "window")]
fn run_windowed(mut driver: Driver) -> Result<()> {
    use sortviz::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

    let mut window = Window::new("sortviz", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut renderer = Renderer::new(window.width(), window.height());
    let mut limiter = FrameLimiter::new(&window);
    let mut title = String::new();
    let mut screenshots = 0u32;

    info!(config = ?driver.config(), "window open");

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h)?;
                    renderer.resize(w, h);
                }
                WindowEvent::Control(Control::Screenshot) => {
                    screenshots += 1;
                    let path = PathBuf::from(format!("sortviz-{screenshots:03}.png"));
                    if let Err(e) = screenshot::save_png(
                        &path,
                        renderer.pixels(),
                        renderer.width(),
                        renderer.height(),
                    ) {
                        tracing::warn!(error = %e, path = %path.display(), "screenshot failed");
                    }
                }
                WindowEvent::Control(control) => {
                    if let Some(change) = control.to_change(driver.config()) {
                        driver.apply(change);
                    }
                }
            }
        }

        driver.update(Instant::now());
        draw_frame(&mut renderer, FrameView::from(&driver));

        let next_title = hud::title(driver.config(), driver.stats());
        if next_title != title {
            window.set_title(&next_title)?;
            title = next_title;
        }

        window.present(renderer.as_bytes())?;
        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_windowed(_driver: Driver) -> Result<()> {
    anyhow::bail!("built without the `window` feature; rerun with --headless")
}
