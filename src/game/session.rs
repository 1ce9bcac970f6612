use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    food::FoodManager,
    snake::{Coordinate, Snake},
};

/// Points awarded for each food eaten
pub const FOOD_REWARD: u32 = 10;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The head left the grid
    Wall,
    /// The head ran into the body
    SelfCollision,
    /// The snake covers every cell, so no food can be placed
    BoardFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver(EndReason),
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }

    pub fn is_game_over(&self) -> bool {
        !self.is_running()
    }
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub state: SessionState,
    pub score: u32,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
}

/// Immutable view of a session handed to renderers
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Body segments, head first
    pub body: Vec<Coordinate>,
    pub food: Option<Coordinate>,
    pub score: u32,
    pub state: SessionState,
    pub direction: Direction,
    pub grid_width: i32,
    pub grid_height: i32,
}

/// Everything a reset replaces
#[derive(Debug, Clone)]
struct Round {
    snake: Snake,
    food: FoodManager,
    score: u32,
    state: SessionState,
}

impl Round {
    fn start<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let center = Coordinate::new(config.grid_width() / 2, config.grid_height() / 2);

        let mut round = Self {
            snake: Snake::new(center, Direction::Right),
            food: FoodManager::new(config),
            score: 0,
            state: SessionState::Running,
        };
        round.spawn_food(rng);
        round
    }

    /// Place new food outside the snake, ending the round if the board is full
    fn spawn_food<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Err(err) = self.food.spawn(&self.snake.occupied(), rng) {
            warn!("{err}: snake of length {} fills the board", self.snake.len());
            self.food.clear();
            self.state = SessionState::GameOver(EndReason::BoardFull);
        }
    }

    fn end(&mut self, reason: EndReason) {
        info!(
            "game over ({reason:?}) with score {} and length {}",
            self.score,
            self.snake.len()
        );
        self.state = SessionState::GameOver(reason);
    }

    fn result(&self, ate_food: bool) -> TickResult {
        TickResult {
            state: self.state,
            score: self.score,
            ate_food,
        }
    }
}

/// Owns the snake, the food and the score, and advances them tick by tick
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    rng: R,
    round: Round,
}

impl GameSession<StdRng> {
    /// Create a session with an entropy-seeded random source
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a session whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let round = Round::start(&config, &mut rng);
        info!(
            "new session on a {}x{} grid",
            config.grid_width(),
            config.grid_height()
        );

        Self { config, rng, round }
    }

    /// Start from an explicit snake and food cell
    pub fn from_parts(config: GameConfig, snake: Snake, food: Coordinate, rng: R) -> Self {
        let mut food_manager = FoodManager::new(&config);
        food_manager.place(food);

        Self {
            config,
            rng,
            round: Round {
                snake,
                food: food_manager,
                score: 0,
                state: SessionState::Running,
            },
        }
    }

    /// Execute one tick of the game
    pub fn advance(&mut self, requested: Direction) -> TickResult {
        let round = &mut self.round;
        if round.state.is_game_over() {
            return round.result(false);
        }

        round.snake.move_towards(requested);
        let head = round.snake.head();

        if !self.config.contains(head.x, head.y) {
            round.end(EndReason::Wall);
            return round.result(false);
        }

        if round.snake.collides_with_self() {
            round.end(EndReason::SelfCollision);
            return round.result(false);
        }

        let ate_food = round.food.position() == Some(head);
        if ate_food {
            round.snake.queue_growth(1);
            round.score += FOOD_REWARD;
            debug!("food eaten at ({}, {}), score {}", head.x, head.y, round.score);
            round.spawn_food(&mut self.rng);
        }

        round.result(ate_food)
    }

    /// Replace the snake, the food and the score with a fresh round
    pub fn reset(&mut self) {
        self.round = Round::start(&self.config, &mut self.rng);
        info!("session reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.round.snake.segments().collect(),
            food: self.round.food.position(),
            score: self.round.score,
            state: self.round.state,
            direction: self.round.snake.direction(),
            grid_width: self.config.grid_width(),
            grid_height: self.config.grid_height(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.round.state
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn snake(&self) -> &Snake {
        &self.round.snake
    }

    pub fn food(&self) -> Option<Coordinate> {
        self.round.food.position()
    }
}
