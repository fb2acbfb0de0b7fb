mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sky_defender::audio::{AudioSink, NullAudio, TerminalBell};
use sky_defender::clock::FramePacer;
use sky_defender::config::GameConfig;
use sky_defender::entities::SpawnMode;
use sky_defender::error::Result;
use sky_defender::game::{Game, GameState};
use sky_defender::input::{main_menu_key, mode_select_key, KeyTracker};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Aircraft,
    Hazard,
    Enemy,
}

impl From<ModeArg> for SpawnMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Aircraft => SpawnMode::Aircraft,
            ModeArg::Hazard => SpawnMode::Hazard,
            ModeArg::Enemy => SpawnMode::Enemy,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Defend the ground against descending invaders", long_about = None)]
struct Cli {
    /// TOML file overriding the default tuning.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed RNG seed for a reproducible round.
    #[arg(long)]
    seed: Option<u64>,
    /// Spawn mode used by "Resume".
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Disable the terminal bell.
    #[arg(long)]
    mute: bool,
    /// Write logs here (the terminal is busy drawing the game).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Startup ──────────────────────────────────────────────────────────────────

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            if std::env::var_os("RUST_LOG").is_none() {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        None => {
            builder.filter_level(log::LevelFilter::Warn);
        }
    }
    builder.init();
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(mode) = cli.mode {
        config.default_mode = mode.into();
    }
    config.validate().context("validate config")?;
    Ok(config)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    let config = load_config(&cli)?;

    let mut audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(NullAudio)
    } else {
        Box::new(TerminalBell::new(stdout()))
    };

    let mut out = BufWriter::new(stdout());
    let keyboard_enhanced = enter_terminal(&mut out)?;
    let rx = spawn_input_reader();

    let result = run(&mut out, &rx, config, audio.as_mut());
    leave_terminal(&mut out, keyboard_enhanced);

    result.context("game loop failed")
}

/// Raw mode plus alternate screen. Returns whether the terminal accepted
/// the request for release/repeat key events (kitty protocol).
fn enter_terminal<W: Write>(out: &mut W) -> anyhow::Result<bool> {
    terminal::enable_raw_mode().context("enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let enhanced = out
        .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
        .is_ok();
    Ok(enhanced)
}

fn leave_terminal<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Terminal events arrive on a channel fed by a thread parked in
/// `event::read`, so a frame never waits on the keyboard.
fn spawn_input_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });
    rx
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
    audio: &mut dyn AudioSink,
) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let fade_ms = config.fade_ms;
    let mut game = Game::new(config, rng);

    menu_loop(out, rx, &mut game)?;
    if game.state() != GameState::Playing {
        return Ok(());
    }

    play_loop(out, rx, &mut game, audio)?;

    if game.state() == GameState::RoundOver {
        audio.fade_out(fade_ms);
        display::render_round_over(out, game.score())?;
        thread::sleep(Duration::from_millis(fade_ms));
    }
    Ok(())
}

// ── Menus ────────────────────────────────────────────────────────────────────

fn menu_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    game: &mut Game<StdRng>,
) -> Result<()> {
    while matches!(game.state(), GameState::MainMenu | GameState::ModeSelect) {
        display::render_menu(out, game.state())?;

        // Block until the user presses something
        let Ok(ev) = rx.recv() else {
            game.quit();
            break;
        };
        let Event::Key(key) = ev else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            game.quit();
            break;
        }
        let choice = match game.state() {
            GameState::MainMenu => main_menu_key(key.code),
            _ => mode_select_key(key.code),
        };
        if let Some(choice) = choice {
            game.choose(choice);
        }
    }
    Ok(())
}

// ── Round ────────────────────────────────────────────────────────────────────

fn play_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    game: &mut Game<StdRng>,
    audio: &mut dyn AudioSink,
) -> Result<()> {
    let mut tracker = KeyTracker::new();
    let mut pacer = FramePacer::new(game.config().frame_rate);
    let mut score_text = String::new();
    let mut input_frame: u64 = 0;

    while game.state() == GameState::Playing {
        input_frame += 1;

        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                tracker.handle(key, input_frame);
            }
        }
        let input = tracker.sample(input_frame);

        let Some(report) = game.frame(&input) else {
            break;
        };
        for event in &report.events {
            audio.play(*event);
        }
        if let Some(text) = &report.render.score_text {
            score_text.clone_from(text);
        }

        display::render(out, &report.render, &score_text, game.fullscreen())?;
        pacer.tick();
    }
    Ok(())
}
