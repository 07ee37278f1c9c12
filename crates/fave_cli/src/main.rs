//! fave - headless favorite button player
//!
//! Runs a click script against favorite buttons and prints every frame and
//! listener call.

mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use fave_animation::FrameScheduler;
use fave_core::Event;
use fave_theme::{IconColor, IconKind};
use fave_widgets::{FavoriteButton, FavoriteButtonBuilder, FavoriteConfig, Widget, WidgetId};
use slotmap::SlotMap;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::thread;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{FaveFile, Step};
use output::{PrintSurface, Printer, Record};

/// Likes shown next to the toolbar heart before the first click
const INITIAL_LIKES: i64 = 37;

#[derive(Parser, Debug)]
#[command(name = "fave")]
#[command(author, version, about = "Play favorite button transitions headlessly", long_about = None)]
struct Cli {
    /// Path to fave.toml, or a directory containing one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial state
    #[arg(long)]
    favorite: Option<bool>,

    /// Icon tint (black or white)
    #[arg(long)]
    color: Option<IconColor>,

    /// Icon shape (star or heart)
    #[arg(long)]
    kind: Option<IconKind>,

    /// Rotation stage length in milliseconds
    #[arg(long, allow_negative_numbers = true)]
    rotation_duration: Option<i64>,

    /// Rotation sweep in degrees
    #[arg(long, allow_negative_numbers = true)]
    rotation_angle: Option<i64>,

    /// Bounce stage length in milliseconds
    #[arg(long, allow_negative_numbers = true)]
    bounce_duration: Option<i64>,

    /// Animate when favoriting
    #[arg(long)]
    animate_favorite: Option<bool>,

    /// Animate when un-favoriting
    #[arg(long)]
    animate_unfavorite: Option<bool>,

    /// Simulated frame length in milliseconds
    #[arg(long)]
    frame_ms: Option<f32>,

    /// Pace frames against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Target frame rate in real-time mode
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Also run a white toolbar heart that keeps a like counter
    #[arg(long)]
    toolbar: bool,

    /// Print JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Flags win over the file
    fn apply_to(&self, config: &mut FavoriteConfig) {
        if let Some(favorite) = self.favorite {
            config.favorite = favorite;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(ms) = self.rotation_duration {
            config.rotation_duration_ms = ms;
        }
        if let Some(degrees) = self.rotation_angle {
            config.rotation_angle_deg = degrees;
        }
        if let Some(ms) = self.bounce_duration {
            config.bounce_duration_ms = ms;
        }
        if let Some(animate) = self.animate_favorite {
            config.animate_favorite = animate;
        }
        if let Some(animate) = self.animate_unfavorite {
            config.animate_unfavorite = animate;
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "fave=info",
        1 => "fave=debug",
        _ => "fave=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

type Buttons = SlotMap<WidgetId, (&'static str, FavoriteButton<PrintSurface>)>;

/// How demo time advances
enum Pace {
    Simulated { frame_ms: f32 },
    Realtime(FrameScheduler),
}

impl Pace {
    fn next_dt(&mut self, left_ms: f32) -> f32 {
        match self {
            Pace::Simulated { frame_ms } => frame_ms.min(left_ms),
            Pace::Realtime(scheduler) => {
                thread::sleep(scheduler.remaining());
                scheduler.tick().min(left_ms)
            }
        }
    }

    /// Render frames until `ms` of demo time has passed
    fn wait(&mut self, ms: f32, buttons: &mut Buttons, printer: &Printer) {
        let mut left = ms;
        while left > 0.0 {
            let dt = self.next_dt(left);
            printer.advance(dt);
            left -= dt;
            for (_, button) in buttons.values_mut() {
                button.update(dt);
            }
        }
    }
}

fn main_button(config: &FavoriteConfig, printer: &Printer) -> Result<FavoriteButton<PrintSurface>> {
    let (changes, ends) = (printer.clone(), printer.clone());
    let button = FavoriteButtonBuilder::from_config(config)
        .on_favorite_change(move |_, favorite| changes.emit("button", Record::Changed { favorite }))
        .on_animation_end(move |_, favorite| ends.emit("button", Record::Ended { favorite }))
        .build(PrintSurface::new("button", printer.clone()))?;
    Ok(button)
}

/// White heart in a toolbar, favorited, with a like count that follows the
/// state and is shown once the animation settles
fn toolbar_button(printer: &Printer) -> Result<FavoriteButton<PrintSurface>> {
    let likes = Rc::new(Cell::new(INITIAL_LIKES));
    let (counter, shown) = (likes.clone(), likes);
    let (changes, ends) = (printer.clone(), printer.clone());

    let button = FavoriteButton::<PrintSurface>::builder()
        .favorite(true)
        .color(IconColor::White)
        .kind(IconKind::Heart)
        .rotation_duration(400)
        .on_favorite_change(move |_, favorite| {
            counter.set(counter.get() + if favorite { 1 } else { -1 });
            changes.emit("toolbar", Record::Changed { favorite });
        })
        .on_animation_end(move |_, favorite| {
            ends.emit("toolbar", Record::Ended { favorite });
            ends.emit("toolbar", Record::Counter { count: shown.get() });
        })
        .build(PrintSurface::new("toolbar", printer.clone()))?;
    Ok(button)
}

fn run_step(step: &Step, buttons: &mut Buttons, pace: &mut Pace, printer: &Printer) {
    match step {
        Step::Click => {
            let event = Event::click(0.0, 0.0).at(printer.now() as u64);
            for (_, button) in buttons.values_mut() {
                button.handle_event(&event);
            }
        }
        Step::Wait { ms } => pace.wait(*ms as f32, buttons, printer),
        Step::Set {
            favorite,
            animated,
            silent,
        } => {
            for (_, button) in buttons.values_mut() {
                match (animated, silent) {
                    (None, false) => button.set_favorite(*favorite),
                    (None, true) => button.set_favorite_suppress_listener(*favorite),
                    (Some(animated), silent) => button.set_favorite_with(*favorite, *animated, *silent),
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut file = match &cli.config {
        Some(path) => FaveFile::load_from(path)?,
        None => FaveFile::load_or_default()?,
    };
    cli.apply_to(&mut file.button);

    let frame_ms = cli.frame_ms.unwrap_or(file.script.frame_ms);
    if !(frame_ms > 0.0 && frame_ms.is_finite()) {
        anyhow::bail!("frame length must be a positive number of milliseconds, got {frame_ms}");
    }

    let printer = Printer::new(cli.json);
    let mut buttons = Buttons::with_key();

    let button = main_button(&file.button, &printer)?;
    buttons.insert_with_key(|id| ("button", button.with_id(id)));
    if cli.toolbar {
        let toolbar = toolbar_button(&printer)?;
        buttons.insert_with_key(|id| ("toolbar", toolbar.with_id(id)));
    }

    let mut pace = if cli.realtime {
        Pace::Realtime(FrameScheduler::with_target_fps(cli.fps))
    } else {
        Pace::Simulated { frame_ms }
    };

    info!(
        buttons = buttons.len(),
        steps = file.script.steps.len(),
        realtime = cli.realtime,
        "running script"
    );
    for step in &file.script.steps {
        run_step(step, &mut buttons, &mut pace, &printer);
    }

    // Let anything still in flight finish
    while buttons.values().any(|(_, button)| button.is_animating()) {
        pace.wait(frame_ms, &mut buttons, &printer);
    }

    info!(elapsed_ms = printer.now(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let cli = Cli::parse_from([
            "fave",
            "--favorite",
            "true",
            "--kind",
            "heart",
            "--rotation-duration",
            "-5",
        ]);
        let mut config = FavoriteConfig::default();
        cli.apply_to(&mut config);

        assert!(config.favorite);
        assert_eq!(config.kind, IconKind::Heart);
        assert_eq!(config.color, IconColor::Black);
        // Passed through; the builder rejects it
        assert_eq!(config.rotation_duration_ms, -5);
        assert!(main_button(&config, &Printer::new(false)).is_err());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        assert!(Cli::try_parse_from(["fave", "--color", "green"]).is_err());
    }

    #[test]
    fn test_script_runs_to_completion() {
        let printer = Printer::new(false);
        let mut buttons = Buttons::with_key();
        let toolbar = toolbar_button(&printer).unwrap();
        let id = buttons.insert_with_key(|id| ("toolbar", toolbar.with_id(id)));
        let mut pace = Pace::Simulated { frame_ms: 16.0 };

        run_step(&Step::Click, &mut buttons, &mut pace, &printer);
        assert!(!buttons[id].1.is_favorite());
        run_step(&Step::Wait { ms: 800 }, &mut buttons, &mut pace, &printer);

        assert!(!buttons[id].1.is_animating());
        assert_eq!(printer.now(), 800.0);
        assert_eq!(buttons[id].1.id(), id);
    }
}
