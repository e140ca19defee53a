use super::{
    action::Direction,
    config::GameConfig,
    state::{Food, GameState, LossCause, Position, Snake},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the head overlapped the food this step
    pub ate_food: bool,
    /// Segments appended this step (each one also added a point)
    pub segments_added: usize,
    /// Set when the step ended in a reset
    pub loss: Option<LossCause>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the game as it looks on launch: head idle at the start point until the first turn
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::initial(&self.config);
        self.fresh_state(snake)
    }

    /// Build the game as it looks after a loss: head at the spawn point moving right
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::spawn(&self.config);
        self.fresh_state(snake)
    }

    fn fresh_state(&mut self, snake: Snake) -> GameState {
        let food = Food::new(
            self.random_food_position(),
            self.config.food_width,
            self.config.food_height,
        );

        GameState::new(snake, food, &self.config)
    }

    /// Apply one directional key press. Returns false if it was a 180-degree turn.
    pub fn steer(&self, state: &mut GameState, direction: Direction) -> bool {
        state.snake.steer(direction, self.config.snake_speed)
    }

    /// Execute one frame of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        state.segments.follow(state.snake.position);
        state.snake.advance();
        state
            .snake
            .clamp_within(state.window_width, state.window_height);

        let loss = self.check_loss(state);
        if let Some(cause) = loss {
            log::info!(
                "Reset after {cause} on frame {}, final score {}",
                state.frames,
                state.score
            );
            self.restart(state);
        }

        let ate_food = state.head_on_food();
        let mut segments_added = 0;

        if ate_food {
            for _ in 0..self.config.growth_unit {
                if !state.segments.push(state.snake.position) {
                    break;
                }
                state.score += 1;
                segments_added += 1;
            }

            state.food.position = self.random_food_position();
            log::debug!(
                "Food eaten: +{segments_added} segments, score {}, food moved to ({}, {})",
                state.score,
                state.food.position.x,
                state.food.position.y
            );
        }

        state.frames += 1;

        StepResult {
            ate_food,
            segments_added,
            loss,
        }
    }

    /// Check the loss conditions in order: self-collision, wall, arena full
    fn check_loss(&self, state: &GameState) -> Option<LossCause> {
        if state.head_on_segment() {
            return Some(LossCause::SelfCollision);
        }

        if !state.head_in_bounds() {
            return Some(LossCause::Wall);
        }

        if state.segments.is_full() {
            return Some(LossCause::MaxLength);
        }

        None
    }

    /// Return the state to its initial configuration in place
    fn restart(&mut self, state: &mut GameState) {
        state.snake = Snake::spawn(&self.config);
        state.segments.clear();
        state.score = 0;
        state.food.position = self.random_food_position();
    }

    /// Pick a random food cell; occupancy by the snake is not considered
    fn random_food_position(&mut self) -> Position {
        let (columns, rows) = self.config.food_cells();
        let x = self.rng.gen_range(0..columns) * self.config.food_width;
        let y = self.rng.gen_range(0..rows) * self.config.food_height;
        Position::new(x, y)
    }
}
