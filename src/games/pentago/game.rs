//! The Pentago engine: validation, move application and outcome resolution.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::lines::{five_in_a_row, lines_through, lines_through_quadrant};
use crate::core::{
    Cell, Color, ColorMap, Direction, GamePhase, GameState, Move, MoveRecord, Position, Quadrant,
};
use crate::display::{self, RenderConfig};
use crate::error::{NotationError, RejectionReason, StateError};
use crate::rules::{GameResult, RulesEngine};

/// A single game of Pentago.
///
/// The engine owns the board exclusively. The only way to change it is
/// [`Pentago::make_move`], which either applies a whole move (placement,
/// rotation unless skipped, phase update) or rejects it without touching
/// anything.
///
/// Serializes as its [`GameState`]; move history is not part of the
/// serialized form, and deserializing re-checks the state's invariants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameState", try_from = "GameState")]
pub struct Pentago {
    state: GameState,
    history: Vector<MoveRecord>,
}

impl Pentago {
    /// Start a new game: empty board, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a game from a saved state.
    ///
    /// Rejects states that no sequence of legal moves could leave behind:
    /// a piece count that disagrees with the board, an in-progress game
    /// with a five-in-a-row or a full board, or a finished game whose
    /// board does not show its result.
    pub fn from_state(state: GameState) -> Result<Self, StateError> {
        state.check_counts()?;

        let lines = completed_lines(&state);
        let (black, white) = (lines[Color::Black], lines[Color::White]);
        match state.phase {
            GamePhase::InProgress => {
                if let Some(color) = Color::ALL.into_iter().find(|&c| lines[c]) {
                    return Err(StateError::UnresolvedWin(color));
                }
                if state.is_board_full() {
                    return Err(StateError::UnresolvedDraw);
                }
            }
            GamePhase::BlackWon if black && !white => {}
            GamePhase::WhiteWon if white && !black => {}
            GamePhase::Draw if black == white && (black || state.is_board_full()) => {}
            phase => return Err(StateError::PhaseMismatch(phase)),
        }

        Ok(Self {
            state,
            history: Vector::new(),
        })
    }

    // === Queries ===

    /// Current phase of the game.
    #[must_use]
    pub fn game_phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Check if all 36 cells are occupied.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.state.is_board_full()
    }

    /// Contents of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> Cell {
        self.state.board.get(position)
    }

    /// Contents of a cell given by label, e.g. `"b3"`.
    pub fn piece_at(&self, label: &str) -> Result<Cell, NotationError> {
        let position = display::parse_label(label)?;
        Ok(self.cell_at(position))
    }

    /// Marbles placed so far.
    #[must_use]
    pub fn pieces_placed(&self) -> u8 {
        self.state.pieces_placed
    }

    /// The color to move, or `None` once the game is over.
    #[must_use]
    pub fn to_move(&self) -> Option<Color> {
        (!self.state.phase.is_terminal()).then(|| self.state.color_to_move())
    }

    /// Snapshot of the full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Every legal move for the player to act: each empty cell with each
    /// quadrant and direction. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.state.phase.is_terminal() {
            return Vec::new();
        }
        Position::all()
            .filter(|&position| self.cell_at(position).is_empty())
            .flat_map(|position| {
                Quadrant::ALL.into_iter().flat_map(move |quadrant| {
                    Direction::ALL
                        .into_iter()
                        .map(move |direction| Move::new(position, quadrant, direction))
                })
            })
            .collect()
    }

    /// Render the board with the default symbols.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Render the board with custom symbols.
    #[must_use]
    pub fn render_with(&self, config: &RenderConfig) -> String {
        display::render_board(self, config)
    }

    // === Moves ===

    /// Check a proposed move without applying it.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// finished game, wrong turn, off-board position, occupied cell,
    /// unknown quadrant, unknown direction.
    ///
    /// `quadrant` and `direction` accept either the typed enums or raw
    /// input (`u8` quadrant number 1..=4, `char` `'C'`/`'A'`).
    pub fn validate<Q, D>(
        &self,
        color: Color,
        position: Position,
        quadrant: Q,
        direction: D,
    ) -> Result<Move, RejectionReason>
    where
        Q: TryInto<Quadrant>,
        D: TryInto<Direction>,
    {
        if self.state.phase.is_terminal() {
            return Err(RejectionReason::GameAlreadyFinished);
        }
        if color != self.state.color_to_move() {
            return Err(RejectionReason::WrongTurn);
        }
        match self.state.board.try_get(position) {
            None => return Err(RejectionReason::OutOfBounds),
            Some(cell) if !cell.is_empty() => return Err(RejectionReason::CellOccupied),
            Some(_) => {}
        }
        let quadrant = quadrant.try_into().map_err(|_| RejectionReason::InvalidQuadrant)?;
        let direction = direction.try_into().map_err(|_| RejectionReason::InvalidDirection)?;

        Ok(Move::new(position, quadrant, direction))
    }

    /// Place a marble for `color` and rotate a quadrant.
    ///
    /// If the placement alone completes five in a row the game ends at once
    /// and the rotation is skipped. Otherwise the quadrant is turned and the
    /// lines through it decide the outcome: both colors completing a line
    /// is a draw, as is a full board with no line.
    ///
    /// ## Example
    ///
    /// ```
    /// use pentago::core::{Color, Direction, GamePhase, Position, Quadrant};
    /// use pentago::error::RejectionReason;
    /// use pentago::games::pentago::Pentago;
    ///
    /// let mut game = Pentago::new();
    /// game.make_move(Color::Black, Position::new(0, 0), Quadrant::Q2, Direction::Clockwise)
    ///     .unwrap();
    ///
    /// // Raw input works too, and is checked in order.
    /// let err = game.make_move(Color::White, Position::new(1, 1), 9u8, 'A');
    /// assert_eq!(err, Err(RejectionReason::InvalidQuadrant));
    ///
    /// assert_eq!(game.game_phase(), GamePhase::InProgress);
    /// assert_eq!(game.to_move(), Some(Color::White));
    /// ```
    pub fn make_move<Q, D>(
        &mut self,
        color: Color,
        position: Position,
        quadrant: Q,
        direction: D,
    ) -> Result<(), RejectionReason>
    where
        Q: TryInto<Quadrant>,
        D: TryInto<Direction>,
    {
        match self.validate(color, position, quadrant, direction) {
            Ok(mv) => {
                self.apply(color, mv);
                Ok(())
            }
            Err(reason) => {
                debug!(%color, %position, %reason, "move rejected");
                Err(reason)
            }
        }
    }

    /// Apply a validated move.
    fn apply(&mut self, color: Color, mv: Move) {
        let ply = self.state.pieces_placed;
        self.state.board.place(mv.position, color);
        self.state.pieces_placed += 1;
        debug!(%color, position = %mv.position, ply, "marble placed");

        if let Some(winner) = self.placement_winner(mv.position) {
            self.history.push_back(MoveRecord::new(ply, color, mv.position, None));
            self.set_phase(GamePhase::won_by(winner));
            return;
        }

        self.state.board.rotate(mv.quadrant, mv.direction);
        trace!(quadrant = %mv.quadrant, direction = %mv.direction, "quadrant rotated");

        self.history.push_back(MoveRecord::new(
            ply,
            color,
            mv.position,
            Some((mv.quadrant, mv.direction)),
        ));
        let phase = self.resolve_rotation(mv.quadrant);
        self.set_phase(phase);
    }

    /// Pre-rotation check: a line through the new marble.
    ///
    /// Only lines through the placed cell changed, so only the mover can
    /// win here and no draw is possible.
    fn placement_winner(&self, position: Position) -> Option<Color> {
        lines_through(position)
            .iter()
            .find_map(|line| five_in_a_row(&self.state.board, line))
    }

    /// Post-rotation check over every line the rotated quadrant touches.
    fn resolve_rotation(&self, quadrant: Quadrant) -> GamePhase {
        let mut wins: ColorMap<bool> = ColorMap::default();
        for line in lines_through_quadrant(quadrant) {
            if let Some(color) = five_in_a_row(&self.state.board, &line) {
                trace!(%color, ?line, "five in a row");
                wins[color] = true;
            }
        }

        match (wins[Color::Black], wins[Color::White]) {
            (true, true) => GamePhase::Draw,
            (true, false) => GamePhase::BlackWon,
            (false, true) => GamePhase::WhiteWon,
            (false, false) if self.state.is_board_full() => GamePhase::Draw,
            (false, false) => GamePhase::InProgress,
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if phase != self.state.phase {
            debug!(%phase, pieces = self.state.pieces_placed, "game over");
        }
        self.state.phase = phase;
    }
}

/// Which colors have a five-in-a-row anywhere on the board.
fn completed_lines(state: &GameState) -> ColorMap<bool> {
    let mut found: ColorMap<bool> = ColorMap::default();
    for position in Position::all() {
        for line in lines_through(position) {
            if let Some(color) = five_in_a_row(&state.board, &line) {
                found[color] = true;
            }
        }
    }
    found
}

impl From<Pentago> for GameState {
    fn from(game: Pentago) -> Self {
        game.state
    }
}

impl TryFrom<GameState> for Pentago {
    type Error = StateError;

    fn try_from(state: GameState) -> Result<Self, Self::Error> {
        Pentago::from_state(state)
    }
}

impl std::fmt::Display for Pentago {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl RulesEngine for Pentago {
    type Action = Move;
    type Error = RejectionReason;

    fn to_move(&self) -> Option<Color> {
        Pentago::to_move(self)
    }

    fn legal_actions(&self) -> Vec<Move> {
        self.legal_moves()
    }

    fn apply_action(&mut self, action: &Move) -> Result<(), RejectionReason> {
        let color = self.state.color_to_move();
        self.make_move(color, action.position, action.quadrant, action.direction)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.state.phase.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    /// Build a game directly from marbles, bypassing turn order.
    fn game_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Pentago {
        let mut state = GameState::new();
        for &(r, c) in black {
            state.board.place(pos(r, c), Color::Black);
        }
        for &(r, c) in white {
            state.board.place(pos(r, c), Color::White);
        }
        state.pieces_placed = (black.len() + white.len()) as u8;
        Pentago::from_state(state).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = Pentago::new();

        assert_eq!(game.game_phase(), GamePhase::InProgress);
        assert_eq!(game.pieces_placed(), 0);
        assert_eq!(game.to_move(), Some(Color::Black));
        assert!(!game.is_board_full());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_accepted_move_places_and_rotates() {
        let mut game = Pentago::new();
        game.make_move(Color::Black, pos(0, 0), Quadrant::Q1, Direction::Clockwise)
            .unwrap();

        // Up-left of Q1 rotated clockwise lands on up-right.
        assert_eq!(game.cell_at(pos(0, 0)), Cell::Empty);
        assert_eq!(game.cell_at(pos(0, 2)), Cell::Black);
        assert_eq!(game.pieces_placed(), 1);
        assert_eq!(game.to_move(), Some(Color::White));

        let record = game.history()[0];
        assert_eq!(record.rotation, Some((Quadrant::Q1, Direction::Clockwise)));
        assert_eq!(record.ply, 0);
    }

    #[test]
    fn test_wrong_turn() {
        let mut game = Pentago::new();
        let result = game.make_move(Color::White, pos(0, 0), Quadrant::Q1, Direction::Clockwise);
        assert_eq!(result, Err(RejectionReason::WrongTurn));
        assert_eq!(game, Pentago::new());
    }

    #[test]
    fn test_rejection_order() {
        let mut game = Pentago::new();
        game.make_move(Color::Black, pos(1, 1), Quadrant::Q4, Direction::Clockwise)
            .unwrap();

        // Wrong turn beats every later check.
        assert_eq!(
            game.validate(Color::Black, pos(9, 9), 0u8, 'x'),
            Err(RejectionReason::WrongTurn)
        );
        // Bounds beat occupancy and the rotation arguments.
        assert_eq!(
            game.validate(Color::White, pos(6, 0), 0u8, 'x'),
            Err(RejectionReason::OutOfBounds)
        );
        // Occupied beats quadrant.
        assert_eq!(
            game.validate(Color::White, pos(1, 1), 0u8, 'x'),
            Err(RejectionReason::CellOccupied)
        );
        // Quadrant beats direction.
        assert_eq!(
            game.validate(Color::White, pos(0, 0), 5u8, 'x'),
            Err(RejectionReason::InvalidQuadrant)
        );
        assert_eq!(
            game.validate(Color::White, pos(0, 0), 4u8, 'x'),
            Err(RejectionReason::InvalidDirection)
        );
        assert_eq!(
            game.validate(Color::White, pos(0, 0), 4u8, 'A'),
            Ok(Move::new(pos(0, 0), Quadrant::Q4, Direction::CounterClockwise))
        );
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Pentago::new();
        game.make_move(Color::Black, pos(2, 2), Quadrant::Q3, Direction::Clockwise)
            .unwrap();
        let before = game.clone();

        assert!(game.make_move(Color::White, pos(2, 2), 1u8, 'C').is_err());
        assert!(game.make_move(Color::White, pos(3, 3), 1u8, 'Z').is_err());

        assert_eq!(game, before);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_placement_win_skips_rotation() {
        // Black has (0,0)..(0,3); the Q1 center holds a white marble.
        let mut game = game_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], &[(1, 1), (5, 5), (4, 4), (3, 3)]);
        let q1_before: Vec<_> = Quadrant::Q1.ring().iter().map(|&p| game.cell_at(p)).collect();

        game.make_move(Color::Black, pos(0, 4), Quadrant::Q1, Direction::Clockwise)
            .unwrap();

        assert_eq!(game.game_phase(), GamePhase::BlackWon);
        let q1_after: Vec<_> = Quadrant::Q1.ring().iter().map(|&p| game.cell_at(p)).collect();
        assert_eq!(q1_before, q1_after);
        assert!(game.history()[0].rotation_skipped());
        assert_eq!(game.to_move(), None);
    }

    #[test]
    fn test_rotation_hands_opponent_the_win() {
        // Black holds row 1 except (1,3); (0,4) is Q2's up cell, and a
        // counter-clockwise turn carries it to the left cell (1,3).
        let mut game = game_with(
            &[(1, 0), (1, 1), (1, 2), (1, 4), (0, 4)],
            &[(5, 0), (5, 1), (5, 3), (4, 0)],
        );
        assert_eq!(game.to_move(), Some(Color::White));
        game.make_move(Color::White, pos(3, 0), Quadrant::Q2, Direction::CounterClockwise)
            .unwrap();

        assert_eq!(game.cell_at(pos(1, 3)), Cell::Black);
        assert_eq!(game.cell_at(pos(0, 4)), Cell::Empty);
        assert_eq!(game.game_phase(), GamePhase::BlackWon);
    }

    #[test]
    fn test_rotation_completing_both_colors_is_draw() {
        // Turning Q4 clockwise moves (5,3),(4,3) up into row 3 for Black and
        // (3,3),(3,4) over into column 5 for White.
        let mut game = game_with(
            &[(3, 0), (3, 1), (3, 2), (5, 3), (4, 3)],
            &[(0, 5), (1, 5), (2, 5), (3, 3), (3, 4)],
        );
        game.make_move(Color::Black, pos(0, 0), Quadrant::Q4, Direction::Clockwise)
            .unwrap();

        assert_eq!(game.game_phase(), GamePhase::Draw);
        assert_eq!(game.is_terminal(), Some(GameResult::Draw));
    }

    #[test]
    fn test_finished_game_rejects_everything() {
        let mut game = game_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], &[(5, 5), (4, 4), (3, 3), (5, 0)]);
        game.make_move(Color::Black, pos(0, 4), Quadrant::Q1, Direction::Clockwise)
            .unwrap();

        assert_eq!(
            game.make_move(Color::Black, pos(9, 9), 0u8, '?'),
            Err(RejectionReason::GameAlreadyFinished)
        );
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.is_terminal(), Some(GameResult::Winner(Color::Black)));
    }

    #[test]
    fn test_legal_moves_count() {
        let mut game = Pentago::new();
        assert_eq!(game.legal_moves().len(), 36 * 8);

        game.make_move(Color::Black, pos(1, 1), Quadrant::Q1, Direction::Clockwise)
            .unwrap();
        assert_eq!(game.legal_moves().len(), 35 * 8);
        assert!(game.legal_moves().iter().all(|mv| mv.position != pos(1, 1)));
    }

    #[test]
    fn test_apply_action_uses_color_to_move() {
        let mut game = Pentago::new();
        let mv = Move::new(pos(3, 4), Quadrant::Q1, Direction::CounterClockwise);

        game.apply_action(&mv).unwrap();
        assert_eq!(game.cell_at(pos(3, 4)), Cell::Black);
        assert!(!game.is_legal(&mv));
    }

    #[test]
    fn test_piece_at_label() {
        let mut game = Pentago::new();
        game.make_move(Color::Black, pos(1, 1), Quadrant::Q4, Direction::Clockwise)
            .unwrap();

        assert_eq!(game.piece_at("b1"), Ok(Cell::Black));
        assert_eq!(game.piece_at("a0"), Ok(Cell::Empty));
        assert!(game.piece_at("z1").is_err());
    }

    #[test]
    fn test_from_state_rejects_inconsistent() {
        let mut state = GameState::new();
        state.board.place(pos(0, 0), Color::Black);
        assert!(matches!(
            Pentago::from_state(state),
            Err(StateError::PieceCountMismatch { .. })
        ));

        let mut state = GameState::new();
        for col in 0..5 {
            state.board.place(pos(2, col), Color::White);
        }
        for &(r, c) in &[(0, 0), (0, 2), (4, 1), (5, 3), (5, 5)] {
            state.board.place(pos(r, c), Color::Black);
        }
        state.pieces_placed = 10;
        assert!(matches!(
            Pentago::from_state(state),
            Err(StateError::UnresolvedWin(Color::White))
        ));

        state.phase = GamePhase::BlackWon;
        assert!(matches!(
            Pentago::from_state(state),
            Err(StateError::PhaseMismatch(GamePhase::BlackWon))
        ));
        state.phase = GamePhase::Draw;
        assert!(Pentago::from_state(state).is_err());

        state.phase = GamePhase::WhiteWon;
        let game = Pentago::from_state(state).unwrap();
        assert_eq!(game.to_move(), None);
    }

    #[test]
    fn test_from_state_rejects_color_imbalance() {
        let mut state = GameState::new();
        state.board.place(pos(0, 0), Color::White);
        state.pieces_placed = 1;
        assert!(matches!(
            Pentago::from_state(state),
            Err(StateError::ColorImbalance { black: 0, white: 1 })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut game = Pentago::new();
        game.make_move(Color::Black, pos(0, 5), Quadrant::Q3, Direction::Clockwise)
            .unwrap();
        game.make_move(Color::White, pos(5, 0), Quadrant::Q2, Direction::CounterClockwise)
            .unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: Pentago = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.state(), game.state());
        assert!(restored.history().is_empty());
    }
}
