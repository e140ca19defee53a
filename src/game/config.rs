use std::time::Duration;

/// Title of the game window
pub const WINDOW_TITLE: &str = "Snake Game";

/// Font used for the score overlay when none is given on the command line
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/TTF/JetBrainsMonoNerdFont-Bold.ttf";

/// Pixel size of the score overlay text
pub const FONT_SIZE: u16 = 15;

/// Fixed delay at the end of every frame (~60 frames per second)
pub const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Geometry and rules of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the play field in pixels
    pub window_width: i32,
    /// Height of the play field in pixels
    pub window_height: i32,
    /// Pixels the head travels per frame
    pub snake_speed: i32,
    /// Size of the head and of every body segment
    pub snake_width: i32,
    pub snake_height: i32,
    /// Size of the food; food is placed on a grid of this cell size
    pub food_width: i32,
    pub food_height: i32,
    /// Segments appended per food item eaten
    pub growth_unit: usize,
    /// Segment count that forces a reset once reached
    pub max_segments: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            snake_speed: 4,
            snake_width: 25,
            snake_height: 25,
            food_width: 20,
            food_height: 20,
            growth_unit: 5,
            max_segments: 1000,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom play field size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            ..Default::default()
        }
    }

    /// Top-left corner the head occupies when the program starts
    pub fn start_point(&self) -> (i32, i32) {
        (self.window_width / 2 - 10, self.window_height / 2 + 10)
    }

    /// Top-left corner the head returns to on reset
    pub fn spawn_point(&self) -> (i32, i32) {
        (
            self.window_width / 2 - self.snake_width / 2,
            self.window_height / 2 - self.snake_height / 2,
        )
    }

    /// Number of food cells along each axis
    pub fn food_cells(&self) -> (i32, i32) {
        (
            self.window_width / self.food_width,
            self.window_height / self.food_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.snake_speed, 4);
        assert_eq!(config.growth_unit, 5);
        assert_eq!(config.max_segments, 1000);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(400, 300);
        assert_eq!(config.window_width, 400);
        assert_eq!(config.window_height, 300);
        assert_eq!(config.snake_width, 25);
    }

    #[test]
    fn test_spawn_point_is_centered() {
        assert_eq!(GameConfig::default().spawn_point(), (388, 288));
    }

    #[test]
    fn test_start_point_differs_from_spawn() {
        assert_eq!(GameConfig::default().start_point(), (390, 310));
    }

    #[test]
    fn test_food_cells() {
        assert_eq!(GameConfig::default().food_cells(), (40, 30));
    }
}
