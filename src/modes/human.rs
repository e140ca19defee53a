use anyhow::Result;
use macroquad::window::next_frame;
use std::thread::sleep;

use crate::game::{Direction, GameConfig, GameEngine, GameState, StepResult, FRAME_DELAY};
use crate::input::{InputEvent, InputHandler};
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    /// Same as `new`, with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_engine(GameEngine::seeded(config, seed))
    }

    fn with_engine(mut engine: GameEngine) -> Self {
        let state = engine.new_game();
        Self {
            engine,
            state,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run frames until the window is closed
    pub async fn run(&mut self, renderer: &Renderer, input: &mut InputHandler) -> Result<()> {
        loop {
            for event in input.poll() {
                self.handle_event(event);
            }

            if self.should_quit {
                log::info!("Close requested, exiting.");
                break;
            }

            self.update_game();
            renderer.render(&self.state);

            next_frame().await;
            sleep(FRAME_DELAY);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Steer(direction) => self.steer(direction),
            InputEvent::CloseRequested => self.should_quit = true,
        }
    }

    fn steer(&mut self, direction: Direction) {
        if !self.engine.steer(&mut self.state, direction) {
            log::trace!(
                "Ignored turn to {direction:?} while heading {:?}",
                self.state.snake.direction
            );
        }
    }

    fn update_game(&mut self) -> StepResult {
        self.engine.step(&mut self.state)
    }
}
