//! # Glitter Demo
//!
//! Headless driver for the glitter effect. Clicks along a looping path and
//! reports what a surface would have drawn.
//!
//! ## Usage
//!
//! ```bash
//! glitter_demo --config demos/glitter.toml --clicks 12 --duration 6
//! ```

use std::time::Duration;

use glitter::{
    DeviceCapabilities, Glitter, GlitterConfig, GlyphBatch, GlyphSurface, MouseButton,
    PointerEvent, Point,
};

/// Virtual surface size used for the click path.
const SURFACE: (f32, f32) = (800.0, 600.0);

/// Surface that only keeps counters.
#[derive(Default)]
struct TallySurface {
    frames: u64,
    glyphs: u64,
    largest: usize,
}

impl GlyphSurface for TallySurface {
    fn draw(&mut self, batch: &GlyphBatch) {
        self.frames += 1;
        self.glyphs += batch.len() as u64;
        self.largest = self.largest.max(batch.len());
    }
}

/// Command line options.
struct Options {
    config: Option<String>,
    clicks: u32,
    duration_secs: u64,
    touch: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let Some(options) = parse_args() else {
        return;
    };

    let config = match &options.config {
        Some(path) => match GlitterConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{e}");
                std::process::exit(1);
            }
        },
        None => GlitterConfig::default(),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to build runtime: {e}");
            std::process::exit(1);
        }
    };

    runtime.block_on(run(config, &options));
}

/// Parses command line arguments (simple parsing, no external deps).
fn parse_args() -> Option<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        config: None,
        clicks: 10,
        duration_secs: 5,
        touch: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    options.config = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--clicks" | "-n" => {
                if i + 1 < args.len() {
                    options.clicks = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--duration" | "-d" => {
                if i + 1 < args.len() {
                    options.duration_secs = args[i + 1].parse().unwrap_or(5);
                    i += 1;
                }
            }
            "--touch" | "-t" => options.touch = true,
            "--help" | "-h" => {
                println!("Usage: glitter_demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>      TOML config file (default: built-in)");
                println!("  -n, --clicks <NUM>       Synthetic clicks to send (default: 10)");
                println!("  -d, --duration <SECS>    Run for N seconds then exit (default: 5)");
                println!("  -t, --touch              Pretend the device has a touch screen");
                println!("  -h, --help               Show this help");
                return None;
            }
            other => tracing::warn!("ignoring unknown argument {other}"),
        }
        i += 1;
    }

    Some(options)
}

/// Press event at `point` for the chosen device.
fn press(point: Point, touch: bool) -> PointerEvent {
    if touch {
        PointerEvent::TouchStart {
            touches: vec![point],
        }
    } else {
        PointerEvent::MouseDown {
            x: point.x,
            y: point.y,
            button: MouseButton::Left,
        }
    }
}

/// Click `i` of `n` on a Lissajous loop across the surface.
fn path_point(i: u32, n: u32) -> Point {
    let t = std::f32::consts::TAU * i as f32 / n.max(1) as f32;
    Point::new(
        SURFACE.0 * (0.5 + 0.4 * (3.0 * t).sin()),
        SURFACE.1 * (0.5 + 0.4 * (2.0 * t).cos()),
    )
}

async fn run(config: GlitterConfig, options: &Options) {
    let capabilities = DeviceCapabilities {
        max_touch_points: if options.touch { 5 } else { 0 },
    };
    let period = config.tick_interval();

    let mut glitter = Glitter::new(config, capabilities);
    if let Err(e) = glitter.activate() {
        tracing::error!("{e}");
        return;
    }

    let duration = Duration::from_secs(options.duration_secs);
    let click_every = if options.clicks == 0 {
        duration
    } else {
        duration / (options.clicks * 2)
    };

    let mut surface = TallySurface::default();
    let start = tokio::time::Instant::now();
    let mut frame = tokio::time::interval(period);
    let mut next_click = start;
    let mut sent = 0;

    while start.elapsed() < duration {
        frame.tick().await;

        if sent < options.clicks && tokio::time::Instant::now() >= next_click {
            let point = path_point(sent, options.clicks);
            if glitter.handle(&press(point, options.touch)) {
                tracing::info!(click = sent + 1, x = point.x, y = point.y, "click");
            }
            sent += 1;
            next_click += click_every;
        }

        glitter.draw(&mut surface);
    }

    let stats = glitter.stats();
    glitter.deactivate();

    println!();
    println!("┌─ GLITTER REPORT ───────────────────────────────────────────────");
    println!("│ Pointer:            {:?}", glitter.pointer_kind());
    println!("│ Clicks sent:        {sent}");
    println!("│ Bursts spawned:     {}", stats.field.bursts);
    println!("│ Particles spawned:  {}", stats.field.spawned);
    println!("│ Particles expired:  {}", stats.field.expired);
    println!("│ Peak population:    {}", stats.field.peak_population);
    println!("│ Ticks:              {}", stats.field.ticks);
    println!("│ Avg tick time:      {} μs", stats.ticks.avg_tick_us);
    println!("│ Late ticks:         {}", stats.ticks.late_ticks);
    println!("│ Frames drawn:       {}", surface.frames);
    println!("│ Glyphs drawn:       {}", surface.glyphs);
    println!("│ Largest frame:      {}", surface.largest);
    println!("└────────────────────────────────────────────────────────────────");
}
