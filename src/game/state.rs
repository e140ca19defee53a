use std::fmt;

use super::{action::Direction, config::GameConfig};

/// A pixel position (top-left corner of an element)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Aabb {
    pub fn new(position: Position, width: i32, height: i32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width,
            height,
        }
    }

    /// Strict overlap test; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Check if the box lies fully inside a `width` x `height` area anchored at the origin
    pub fn is_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x + self.width <= width && self.y + self.height <= height
    }
}

/// The player-controlled head of the snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub position: Position,
    pub width: i32,
    pub height: i32,
    pub dx: i32,
    pub dy: i32,
    /// Direction of travel, used to reject 180-degree turns
    pub direction: Direction,
}

impl Snake {
    /// Create a head at `position` travelling in `direction` at `speed`
    pub fn new(position: Position, direction: Direction, speed: i32, width: i32, height: i32) -> Self {
        let (dx, dy) = direction.velocity(speed);
        Self {
            position,
            width,
            height,
            dx,
            dy,
            direction,
        }
    }

    /// Head at the spawn point moving right
    pub fn spawn(config: &GameConfig) -> Self {
        let (x, y) = config.spawn_point();
        Self::new(
            Position::new(x, y),
            Direction::Right,
            config.snake_speed,
            config.snake_width,
            config.snake_height,
        )
    }

    /// Head as the program starts: facing right but standing still until the first turn
    pub fn initial(config: &GameConfig) -> Self {
        let (x, y) = config.start_point();
        Self {
            position: Position::new(x, y),
            width: config.snake_width,
            height: config.snake_height,
            dx: 0,
            dy: 0,
            direction: Direction::Right,
        }
    }

    /// Turn towards `direction` unless it reverses the current one.
    /// Returns whether the turn was taken.
    pub fn steer(&mut self, direction: Direction, speed: i32) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        let (dx, dy) = direction.velocity(speed);
        self.dx = dx;
        self.dy = dy;
        self.direction = direction;
        true
    }

    /// Move the head by its velocity
    pub fn advance(&mut self) {
        self.position = self.position.moved_by(self.dx, self.dy);
    }

    /// Pull the head back inside a `width` x `height` window
    pub fn clamp_within(&mut self, width: i32, height: i32) {
        let max_x = (width - self.width).max(0);
        let max_y = (height - self.height).max(0);
        self.position.x = self.position.x.clamp(0, max_x);
        self.position.y = self.position.y.clamp(0, max_y);
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.position, self.width, self.height)
    }
}

/// Body segments trailing the head, stored in a pre-allocated arena with a hard capacity.
/// Index 0 is the segment nearest the head.
#[derive(Debug, Clone, PartialEq)]
pub struct Segments {
    cells: Vec<Position>,
    capacity: usize,
    width: i32,
    height: i32,
}

impl Segments {
    pub fn with_capacity(capacity: usize, width: i32, height: i32) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            capacity,
            width,
            height,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.capacity
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    /// Append a segment at `position`. Returns false when the arena is full.
    pub fn push(&mut self, position: Position) -> bool {
        if self.is_full() {
            return false;
        }
        self.cells.push(position);
        true
    }

    /// Shift every segment onto its predecessor's position; the first takes `leader`
    pub fn follow(&mut self, leader: Position) {
        if self.cells.is_empty() {
            return;
        }
        self.cells.rotate_right(1);
        self.cells[0] = leader;
    }

    /// Exact position match against any segment
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn hitboxes(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.cells
            .iter()
            .map(move |&pos| Aabb::new(pos, self.width, self.height))
    }
}

/// The single food item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub width: i32,
    pub height: i32,
}

impl Food {
    pub fn new(position: Position, width: i32, height: i32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.position, self.width, self.height)
    }
}

/// Reason a frame ended in a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    /// Head landed exactly on a body segment
    SelfCollision,
    /// Head left the window
    Wall,
    /// Segment arena reached its capacity
    MaxLength,
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LossCause::SelfCollision => "self collision",
            LossCause::Wall => "wall collision",
            LossCause::MaxLength => "maximum length reached",
        };
        f.write_str(label)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub segments: Segments,
    pub food: Food,
    pub window_width: i32,
    pub window_height: i32,
    pub score: u32,
    pub frames: u64,
}

impl GameState {
    /// Create a new game state with no body segments
    pub fn new(snake: Snake, food: Food, config: &GameConfig) -> Self {
        Self {
            snake,
            segments: Segments::with_capacity(
                config.max_segments,
                config.snake_width,
                config.snake_height,
            ),
            food,
            window_width: config.window_width,
            window_height: config.window_height,
            score: 0,
            frames: 0,
        }
    }

    /// Check if the head lies inside the window
    pub fn head_in_bounds(&self) -> bool {
        self.snake
            .hitbox()
            .is_within(self.window_width, self.window_height)
    }

    /// Check if the head sits exactly on a body segment
    pub fn head_on_segment(&self) -> bool {
        self.segments.contains(self.snake.position)
    }

    /// Check if the head's box overlaps the food's box
    pub fn head_on_food(&self) -> bool {
        self.snake.hitbox().overlaps(&self.food.hitbox())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(4, 0), Position::new(9, 5));
        assert_eq!(pos.moved_by(0, -4), Position::new(5, 1));
    }

    #[test]
    fn test_aabb_overlap() {
        let head = Aabb::new(Position::new(100, 100), 25, 25);
        assert!(head.overlaps(&Aabb::new(Position::new(104, 100), 20, 20)));
        assert!(head.overlaps(&Aabb::new(Position::new(80, 80), 21, 21)));

        // Touching edges only
        assert!(!head.overlaps(&Aabb::new(Position::new(125, 100), 20, 20)));
        assert!(!head.overlaps(&Aabb::new(Position::new(80, 100), 20, 20)));
        assert!(!head.overlaps(&Aabb::new(Position::new(100, 125), 20, 20)));
    }

    #[test]
    fn test_aabb_within() {
        assert!(Aabb::new(Position::new(0, 0), 25, 25).is_within(800, 600));
        assert!(Aabb::new(Position::new(775, 575), 25, 25).is_within(800, 600));
        assert!(!Aabb::new(Position::new(776, 0), 25, 25).is_within(800, 600));
        assert!(!Aabb::new(Position::new(0, -1), 25, 25).is_within(800, 600));
    }

    #[test]
    fn test_snake_spawn() {
        let snake = Snake::spawn(&GameConfig::default());
        assert_eq!(snake.position, Position::new(388, 288));
        assert_eq!((snake.dx, snake.dy), (4, 0));
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_snake_initial_is_stationary() {
        let mut snake = Snake::initial(&GameConfig::default());
        assert_eq!(snake.position, Position::new(390, 310));
        assert_eq!((snake.dx, snake.dy), (0, 0));
        assert_eq!(snake.direction, Direction::Right);

        snake.advance();
        assert_eq!(snake.position, Position::new(390, 310));

        // Still counts as heading right
        assert!(!snake.steer(Direction::Left, 4));
        assert_eq!((snake.dx, snake.dy), (0, 0));
        assert!(snake.steer(Direction::Down, 4));
        assert_eq!((snake.dx, snake.dy), (0, 4));
    }

    #[test]
    fn test_snake_steer_rejects_reversal() {
        let mut snake = Snake::spawn(&GameConfig::default());

        assert!(!snake.steer(Direction::Left, 4));
        assert_eq!((snake.dx, snake.dy), (4, 0));
        assert_eq!(snake.direction, Direction::Right);

        assert!(snake.steer(Direction::Up, 4));
        assert_eq!((snake.dx, snake.dy), (0, -4));

        assert!(snake.steer(Direction::Left, 4));
        assert_eq!((snake.dx, snake.dy), (-4, 0));
        assert_eq!(snake.direction, Direction::Left);
    }

    #[test]
    fn test_snake_clamp() {
        let mut snake = Snake::new(Position::new(-4, 590), Direction::Left, 4, 25, 25);
        snake.clamp_within(800, 600);
        assert_eq!(snake.position, Position::new(0, 575));

        snake.position = Position::new(790, -3);
        snake.clamp_within(800, 600);
        assert_eq!(snake.position, Position::new(775, 0));
    }

    #[test]
    fn test_segments_follow_leader() {
        let mut segments = Segments::with_capacity(10, 25, 25);
        segments.push(Position::new(3, 0));
        segments.push(Position::new(2, 0));
        segments.push(Position::new(1, 0));

        segments.follow(Position::new(4, 0));

        assert_eq!(
            segments.positions(),
            &[Position::new(4, 0), Position::new(3, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_segments_follow_empty_is_noop() {
        let mut segments = Segments::with_capacity(10, 25, 25);
        segments.follow(Position::new(4, 0));
        assert!(segments.is_empty());
    }

    #[test]
    fn test_segments_capacity() {
        let mut segments = Segments::with_capacity(2, 25, 25);
        assert!(segments.push(Position::new(0, 0)));
        assert!(segments.push(Position::new(0, 0)));
        assert!(segments.is_full());
        assert!(!segments.push(Position::new(0, 0)));
        assert_eq!(segments.len(), 2);

        segments.clear();
        assert!(segments.is_empty());
        assert_eq!(segments.capacity(), 2);
    }

    #[test]
    fn test_head_on_segment_needs_exact_match() {
        let config = GameConfig::default();
        let snake = Snake::new(Position::new(100, 100), Direction::Right, 4, 25, 25);
        let food = Food::new(Position::new(0, 0), 20, 20);
        let mut state = GameState::new(snake, food, &config);

        // Boxes overlap heavily but positions differ
        state.segments.push(Position::new(102, 100));
        assert!(!state.head_on_segment());

        state.segments.push(Position::new(100, 100));
        assert!(state.head_on_segment());
    }
}
