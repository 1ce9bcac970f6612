use std::collections::{HashSet, VecDeque};

use super::direction::Direction;
use super::error::GameError;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move coordinate by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move coordinate one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head first
    body: VecDeque<Coordinate>,
    /// Current direction of movement
    direction: Direction,
    /// Ticks left in which the tail stays in place
    pending_growth: u32,
}

impl Snake {
    /// Create a one-segment snake
    pub fn new(start: Coordinate, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            pending_growth: 0,
        }
    }

    /// Create a snake from explicit head-first segments.
    ///
    /// Every pair of consecutive segments must be one grid step apart.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Coordinate>,
        direction: Direction,
    ) -> Result<Self, GameError> {
        let body: VecDeque<Coordinate> = segments.into_iter().collect();
        if body.is_empty() {
            return Err(GameError::EmptyBody);
        }

        for (front, back) in body.iter().zip(body.iter().skip(1)) {
            Direction::between(*back, *front)?;
        }

        Ok(Self {
            body,
            direction,
            pending_growth: 0,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Coordinate {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Coordinate {
        self.body[self.body.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Body segments, head first
    pub fn segments(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.body.iter().copied()
    }

    /// Cells covered by the body
    pub fn occupied(&self) -> HashSet<Coordinate> {
        self.segments().collect()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Keep the tail in place for `amount` more moves
    pub fn queue_growth(&mut self, amount: u32) {
        self.pending_growth = self.pending_growth.saturating_add(amount);
    }

    /// Advance one cell.
    ///
    /// A request to reverse into the neck is ignored and the snake keeps its
    /// current heading. A one-segment snake has no neck and may turn around.
    pub fn move_towards(&mut self, requested: Direction) {
        let direction = if requested.is_opposite(self.direction) && self.body.len() > 1 {
            self.direction
        } else {
            requested
        };

        let new_head = self.head().moved_in_direction(direction);
        self.body.push_front(new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_back();
        }

        self.direction = direction;
    }

    /// Check whether the head overlaps any other segment
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Check whether a cell is covered by any segment, head included
    pub fn collides_with(&self, coordinate: Coordinate) -> bool {
        self.body.contains(&coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(head: Coordinate, direction: Direction, length: i32) -> Snake {
        let (dx, dy) = direction.vector();
        let segments = (0..length).map(|i| head.moved_by(-dx * i, -dy * i));
        Snake::from_segments(segments, direction).unwrap()
    }

    #[test]
    fn test_coordinate_movement() {
        let pos = Coordinate::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Coordinate::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Coordinate::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Coordinate::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Coordinate::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Coordinate::new(5, 5), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Coordinate::new(5, 5));
        assert_eq!(snake.tail(), Coordinate::new(5, 5));
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn test_from_segments_rejects_gaps() {
        let result = Snake::from_segments(
            [Coordinate::new(5, 5), Coordinate::new(3, 5)],
            Direction::Right,
        );
        assert_eq!(
            result,
            Err(GameError::InvalidDirectionVector { dx: 2, dy: 0 })
        );
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert_eq!(
            Snake::from_segments(Vec::new(), Direction::Up),
            Err(GameError::EmptyBody)
        );
    }

    #[test]
    fn test_move_without_growth_translates() {
        let mut snake = straight(Coordinate::new(5, 5), Direction::Right, 3);
        let old_tail = snake.tail();

        snake.move_towards(Direction::Right);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Coordinate::new(6, 5));
        assert!(!snake.collides_with(old_tail));
    }

    #[test]
    fn test_move_with_growth_keeps_tail() {
        let mut snake = straight(Coordinate::new(5, 5), Direction::Right, 2);
        let old_tail = snake.tail();

        snake.queue_growth(1);
        snake.move_towards(Direction::Down);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Coordinate::new(5, 6));
        assert_eq!(snake.tail(), old_tail);
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn test_queued_growth_spreads_over_ticks() {
        let mut snake = Snake::new(Coordinate::new(0, 0), Direction::Right);
        snake.queue_growth(2);

        snake.move_towards(Direction::Right);
        snake.move_towards(Direction::Right);
        snake.move_towards(Direction::Right);

        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![
                Coordinate::new(3, 0),
                Coordinate::new(2, 0),
                Coordinate::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_queue_growth_saturates() {
        let mut snake = Snake::new(Coordinate::new(0, 0), Direction::Right);
        snake.queue_growth(u32::MAX);
        snake.queue_growth(1);

        assert_eq!(snake.pending_growth(), u32::MAX);

        snake.move_towards(Direction::Right);
        assert_eq!(snake.pending_growth(), u32::MAX - 1);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_reversal_ignored_for_long_snake() {
        for direction in Direction::ALL {
            let head = Coordinate::new(10, 10);
            let mut snake = straight(head, direction, 3);

            snake.move_towards(direction.opposite());

            assert_eq!(snake.direction(), direction);
            assert_eq!(snake.len(), 3);
            assert_eq!(snake.head(), head.moved_in_direction(direction));
        }
    }

    #[test]
    fn test_single_segment_may_reverse() {
        let mut snake = Snake::new(Coordinate::new(2, 2), Direction::Right);

        snake.move_towards(Direction::Left);

        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head(), Coordinate::new(1, 2));
    }

    #[test]
    fn test_self_collision_on_curl() {
        // Head at (1,1) turns down onto (1,2), which stays covered after the tail moves
        let mut snake = Snake::from_segments(
            [
                Coordinate::new(1, 1),
                Coordinate::new(2, 1),
                Coordinate::new(2, 2),
                Coordinate::new(2, 3),
                Coordinate::new(1, 3),
                Coordinate::new(1, 2),
                Coordinate::new(0, 2),
            ],
            Direction::Left,
        )
        .unwrap();
        assert!(!snake.collides_with_self());

        snake.move_towards(Direction::Down);

        assert_eq!(snake.head(), Coordinate::new(1, 2));
        assert!(snake.collides_with_self());
    }

    #[test]
    fn test_moving_into_vacated_tail_is_safe() {
        // 2x2 loop: the head steps onto the cell the tail just left
        let mut snake = Snake::from_segments(
            [
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
                Coordinate::new(0, 1),
            ],
            Direction::Left,
        )
        .unwrap();

        snake.move_towards(Direction::Down);

        assert_eq!(snake.head(), Coordinate::new(0, 1));
        assert!(!snake.collides_with_self());
    }

    #[test]
    fn test_collides_with_includes_head() {
        let snake = straight(Coordinate::new(5, 5), Direction::Right, 3);
        assert!(snake.collides_with(Coordinate::new(5, 5)));
        assert!(snake.collides_with(Coordinate::new(3, 5)));
        assert!(!snake.collides_with(Coordinate::new(10, 10)));
        assert_eq!(snake.occupied().len(), 3);
    }
}
