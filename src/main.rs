use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::Conf;
use pixel_snake::game::{GameConfig, DEFAULT_FONT_PATH, FONT_SIZE, WINDOW_TITLE};
use pixel_snake::input::InputHandler;
use pixel_snake::launch::{run_guarded, EXIT_FAILURE};
use pixel_snake::modes::HumanMode;
use pixel_snake::render::Renderer;

#[derive(Parser)]
#[command(name = "pixel_snake")]
#[command(version, about = "Single-screen snake arcade game")]
struct Cli {
    /// TrueType font used for the score overlay
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: false,
        platform: Platform {
            // Pacing comes from the fixed frame delay, not vsync
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

async fn run(cli: Cli, config: GameConfig) -> Result<()> {
    let renderer = Renderer::load(&cli.font, FONT_SIZE)
        .await
        .context("Failed to initialize the score overlay")?;
    let mut input = InputHandler::new();

    let mut human_mode = match cli.seed {
        Some(seed) => HumanMode::with_seed(config, seed),
        None => HumanMode::new(config),
    };
    human_mode.run(&renderer, &mut input).await
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = GameConfig::default();

    log::info!(
        "Starting {}x{} window, font {}",
        config.window_width,
        config.window_height,
        cli.font.display()
    );
    if let Some(seed) = cli.seed {
        log::info!("Food placement seeded with {seed}");
    }

    let conf = window_conf(&config);
    let status = run_guarded(move || {
        macroquad::Window::from_config(conf, async move {
            if let Err(err) = run(cli, config).await {
                log::error!("{err:#}");
                std::process::exit(EXIT_FAILURE);
            }
        });
    });
    std::process::exit(status);
}
