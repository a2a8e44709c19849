//! the snake body, kept as an arena of per-cell links
use crate::board::{Board, CellId};
use crate::types::{Direction, Position};

/// what one board cell holds for the body arena. Links run tail to head:
/// every occupied cell except the head names the cell one segment closer to
/// the head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Vacant,
    Towards(CellId),
    Head,
}

/// The snake's body: an ordered chain of occupied cells from tail to head,
/// stored as one `Link` per board cell plus explicit head and tail handles.
/// A body always has at least one segment, and no cell ever holds two
/// segments; callers check collisions before mutating.
///
/// Normal movement is O(1) at both ends. Reversal is O(length), which is fine
/// because it only happens on the rare reversal food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    links: Vec<Link>,
    head: CellId,
    tail: CellId,
    len: u16,
}

impl SnakeBody {
    /// makes a single-segment body occupying the given cell
    pub fn new(board: &Board, start: CellId) -> Self {
        let mut links = vec![Link::Vacant; board.cell_count()];
        links[start.as_index()] = Link::Head;
        SnakeBody {
            links,
            head: start,
            tail: start,
            len: 1,
        }
    }

    /// the cell the head occupies
    pub fn head(&self) -> CellId {
        self.head
    }

    /// the cell the tail occupies
    pub fn tail(&self) -> CellId {
        self.tail
    }

    /// number of occupied cells
    pub fn len(&self) -> u16 {
        self.len
    }

    /// always false: a body keeps at least one segment for its whole life
    pub fn is_empty(&self) -> bool {
        false
    }

    /// whether the given cell is part of the body
    pub fn occupies(&self, cell: CellId) -> bool {
        self.links[cell.as_index()] != Link::Vacant
    }

    /// the cell one segment closer to the head, None for the head itself
    fn successor(&self, cell: CellId) -> Option<CellId> {
        match self.links[cell.as_index()] {
            Link::Towards(next) => Some(next),
            _ => None,
        }
    }

    /// extends the body by making the given cell the new head. The cell must
    /// not already be occupied; the engine checks collisions first
    pub fn advance_head(&mut self, cell: CellId) {
        debug_assert!(!self.occupies(cell));
        self.links[self.head.as_index()] = Link::Towards(cell);
        self.links[cell.as_index()] = Link::Head;
        self.head = cell;
        self.len += 1;
    }

    /// removes the tail segment and returns its freed cell. On a single
    /// segment body there is nothing to remove: the tail stays put and this
    /// returns None
    pub fn retract_tail(&mut self) -> Option<CellId> {
        if let Link::Towards(next) = self.links[self.tail.as_index()] {
            let freed = self.tail;
            self.links[freed.as_index()] = Link::Vacant;
            self.tail = next;
            self.len -= 1;
            Some(freed)
        } else {
            None
        }
    }

    /// splices a new tail segment one step behind the current tail, against
    /// the direction the tail end is travelling (derived from the tail's
    /// successor, or `heading` for a single-segment body). If the computed
    /// cell is off the board or already occupied the body is left unchanged
    /// and this returns None: the snake simply does not lengthen
    pub fn grow_tail(&mut self, heading: Direction, board: &Board) -> Option<CellId> {
        let travel = match self.successor(self.tail) {
            Some(next) => {
                Direction::between(board.position_of(self.tail), board.position_of(next))?
            }
            None => heading,
        };
        let behind = board.position_of(self.tail).sub_vec(travel.to_vector());
        let cell = board.cell_at(behind)?;
        if self.occupies(cell) {
            return None;
        }

        self.links[cell.as_index()] = Link::Towards(self.tail);
        self.tail = cell;
        self.len += 1;
        Some(cell)
    }

    /// reverses the chain end to end and swaps the head and tail roles, so
    /// the segment that was the tail leads movement from now on. Returns the
    /// recomputed travel direction for the new head, or None for a single
    /// segment body where reversing changes nothing
    pub fn reverse(&mut self, board: &Board) -> Option<Direction> {
        let behind_new_head = self.successor(self.tail)?;

        let mut prev: Option<CellId> = None;
        let mut cur = Some(self.tail);
        while let Some(cell) = cur {
            let next = self.successor(cell);
            self.links[cell.as_index()] = match prev {
                None => Link::Head,
                Some(p) => Link::Towards(p),
            };
            prev = cur;
            cur = next;
        }

        let old_head = self.head;
        self.head = self.tail;
        self.tail = old_head;

        Direction::between(board.position_of(behind_new_head), board.position_of(self.head))
    }

    /// the occupied cells in order from tail to head
    pub fn cells(&self) -> Vec<CellId> {
        let mut out = Vec::with_capacity(self.len as usize);
        let mut cur = Some(self.tail);
        while let Some(cell) = cur {
            out.push(cell);
            cur = self.successor(cell);
        }
        debug_assert_eq!(out.len(), self.len as usize);
        out
    }

    /// the position of the head on the given board
    pub fn head_position(&self, board: &Board) -> Position {
        board.position_of(self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(10, 10).unwrap()
    }

    #[test]
    fn test_single_segment_body() {
        let board = board();
        let body = SnakeBody::new(&board, CellId(34));
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), CellId(34));
        assert_eq!(body.tail(), CellId(34));
        assert!(body.occupies(CellId(34)));
        assert!(!body.occupies(CellId(35)));
        assert_eq!(body.cells(), vec![CellId(34)]);
    }

    #[test]
    fn test_advance_then_retract_keeps_length() {
        let board = board();
        let mut body = SnakeBody::new(&board, CellId(34));
        body.advance_head(CellId(35));
        assert_eq!(body.len(), 2);
        assert_eq!(body.cells(), vec![CellId(34), CellId(35)]);

        assert_eq!(body.retract_tail(), Some(CellId(34)));
        assert_eq!(body.len(), 1);
        assert!(!body.occupies(CellId(34)));
        assert!(body.occupies(CellId(35)));
        assert_eq!(body.head(), CellId(35));
        assert_eq!(body.tail(), CellId(35));
    }

    #[test]
    fn test_retract_single_segment_is_a_noop() {
        let board = board();
        let mut body = SnakeBody::new(&board, CellId(34));
        assert_eq!(body.retract_tail(), None);
        assert_eq!(body.len(), 1);
        assert!(body.occupies(CellId(34)));
    }

    #[test]
    fn test_grow_behind_travelling_tail() {
        let board = board();
        let mut body = SnakeBody::new(&board, CellId(34));
        body.advance_head(CellId(35));

        // tail at (3,3) travelling right, so growth lands at (3,2)
        assert_eq!(body.grow_tail(Direction::Up, &board), Some(CellId(33)));
        assert_eq!(body.len(), 3);
        assert_eq!(body.tail(), CellId(33));
        assert_eq!(body.cells(), vec![CellId(33), CellId(34), CellId(35)]);
    }

    #[test]
    fn test_grow_single_segment_uses_heading() {
        let board = board();
        let mut body = SnakeBody::new(&board, CellId(34));
        assert_eq!(body.grow_tail(Direction::Right, &board), Some(CellId(33)));
        assert_eq!(body.cells(), vec![CellId(33), CellId(34)]);
    }

    #[test]
    fn test_grow_off_board_is_skipped() {
        let board = board();
        // single segment in the top-left corner travelling down: growth would
        // land above the board
        let mut body = SnakeBody::new(&board, CellId(1));
        assert_eq!(body.grow_tail(Direction::Down, &board), None);
        assert_eq!(body.len(), 1);
        assert_eq!(body.cells(), vec![CellId(1)]);
    }

    #[test]
    fn test_grow_into_occupied_cell_is_skipped() {
        let board = board();
        // body curls around so that the cell behind the tail is occupied:
        // tail 33 -> 34 -> 24 -> 23 -> 22 -> 32 (head). The tail travels
        // right, so growth targets 32, which the head holds.
        let mut body = SnakeBody::new(&board, CellId(33));
        body.advance_head(CellId(34));
        body.advance_head(CellId(24));
        body.advance_head(CellId(23));
        body.advance_head(CellId(22));
        body.advance_head(CellId(32));
        assert_eq!(body.len(), 6);

        assert_eq!(body.grow_tail(Direction::Right, &board), None);
        assert_eq!(body.len(), 6);
        assert_eq!(body.tail(), CellId(33));
    }

    #[test]
    fn test_reverse_swaps_ends() {
        let board = board();
        let mut body = SnakeBody::new(&board, CellId(34));
        body.advance_head(CellId(35));
        body.advance_head(CellId(36));

        let new_heading = body.reverse(&board);
        assert_eq!(new_heading, Some(Direction::Left));
        assert_eq!(body.head(), CellId(34));
        assert_eq!(body.tail(), CellId(36));
        assert_eq!(body.len(), 3);
        assert_eq!(body.cells(), vec![CellId(36), CellId(35), CellId(34)]);
    }

    #[test]
    fn test_reverse_single_segment_is_a_noop() {
        let board = board();
        let mut body = SnakeBody::new(&board, CellId(34));
        assert_eq!(body.reverse(&board), None);
        assert_eq!(body.head(), CellId(34));
        assert_eq!(body.tail(), CellId(34));
    }

    #[test]
    fn test_reverse_then_extend_from_old_tail_end() {
        let board = board();
        let mut body = SnakeBody::new(&board, CellId(34));
        body.advance_head(CellId(35));
        body.advance_head(CellId(36));
        body.reverse(&board).unwrap();

        // the old tail leads now; keep moving left
        body.advance_head(CellId(33));
        assert_eq!(body.retract_tail(), Some(CellId(36)));
        assert_eq!(body.cells(), vec![CellId(35), CellId(34), CellId(33)]);
    }
}
