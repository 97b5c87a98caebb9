use super::{action::Direction, grid::Cell};

/// Per-tick movement delta of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heading {
    pub dx: i32,
    pub dy: i32,
    /// Set once a change has been committed in the current tick
    changed: bool,
}

impl Heading {
    /// Zero heading used at spawn
    pub fn stopped() -> Self {
        Self::default()
    }

    /// Heading pointing one cell in `direction`
    pub fn towards(direction: Direction, scale: i32) -> Self {
        let (dx, dy) = direction.delta(scale);
        Self {
            dx,
            dy,
            changed: false,
        }
    }

    /// Direction the heading points to, `None` while stopped
    pub fn direction(&self) -> Option<Direction> {
        match (self.dx.signum(), self.dy.signum()) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Whether a change was already committed this tick
    #[cfg(test)]
    pub(crate) fn changed_this_tick(&self) -> bool {
        self.changed
    }

    /// Whether [`request`](Self::request) would turn towards `requested`
    pub fn accepts(&self, requested: Direction) -> bool {
        if self.changed {
            return false;
        }

        self.direction()
            .is_none_or(|current| current != requested && !current.is_opposite(requested))
    }

    /// Try to turn towards `requested`
    ///
    /// Requests on the current axis (a reversal or the current direction) are
    /// ignored, as is anything after the first change committed this tick.
    /// Returns whether the heading changed.
    pub fn request(&mut self, requested: Direction, scale: i32) -> bool {
        if !self.accepts(requested) {
            return false;
        }

        let (dx, dy) = requested.delta(scale);
        self.dx = dx;
        self.dy = dy;
        self.changed = true;
        true
    }

    /// Reopen the heading for changes in the next tick
    pub fn end_tick(&mut self) {
        self.changed = false;
    }
}

/// The snake, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
    pub heading: Heading,
}

impl Snake {
    /// Fresh single-cell snake that is not moving yet
    pub fn new(head: Cell) -> Self {
        Self {
            body: vec![head],
            heading: Heading::stopped(),
        }
    }

    /// Snake with an explicit body layout; `None` if `body` is empty
    pub fn with_body(body: Vec<Cell>, heading: Heading) -> Option<Self> {
        (!body.is_empty()).then_some(Self { body, heading })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// All cells, head at index 0
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    /// Cells behind the head
    pub fn trailing(&self) -> &[Cell] {
        &self.body[1..]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Where the head would land after moving with the current heading
    pub fn candidate_head(&self) -> Cell {
        self.head().moved_by(self.heading.dx, self.heading.dy)
    }

    /// Move as a unit: each segment takes its predecessor's place, then the
    /// head moves to `new_head`
    pub fn advance(&mut self, new_head: Cell) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = new_head;
    }

    /// Extend by one segment stacked on the current tail
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }
}
