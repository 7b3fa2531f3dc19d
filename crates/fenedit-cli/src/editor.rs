//! Line-driven board editor holding the current FEN and view settings.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use fenedit_core::{
    InputValidation, STARTING_FEN, clear_board, fen_to_board_state, get_piece_at, move_piece,
    parse_fen, set_fullmove_number, set_halfmove_clock, update_active_color,
    update_castling_rights, update_en_passant, update_piece_at, validate_en_passant_input,
    validate_fen_input,
};
use fenedit_drag::{BoardGeometry, BoardLayout, DragSession, DragSource, DropConfig};

use crate::command::{Command, EditorOption, parse_command};
use crate::error::EditorError;
use crate::render::RendererRegistry;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Set the side to move from each en passant square entered.
    pub auto_turn: bool,
    /// Border drawn inside the board layout, in pixels.
    pub border_inset: f64,
    /// Edge length of one square, in pixels.
    pub square_size: f64,
    /// Black at the bottom.
    pub flipped: bool,
    /// Renderer used by `display`.
    pub piece_set: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            auto_turn: true,
            border_inset: 2.0,
            square_size: 50.0,
            flipped: false,
            piece_set: "ascii".to_string(),
        }
    }
}

/// The editor: one FEN string plus everything needed to edit it by pointer.
pub struct Editor {
    fen: String,
    config: EditorConfig,
    layout: BoardLayout,
    drag: DragSession,
    renderers: RendererRegistry,
}

impl Editor {
    /// Create an editor on the starting position with the default renderers.
    pub fn new() -> Self {
        Self::with_renderers(RendererRegistry::with_defaults())
    }

    /// Create an editor that draws with the given registry.
    pub fn with_renderers(renderers: RendererRegistry) -> Self {
        let config = EditorConfig::default();
        let size = config.square_size * 8.0 + config.border_inset * 2.0;
        Self {
            fen: STARTING_FEN.to_string(),
            config,
            layout: BoardLayout::new(0.0, 0.0, size, size),
            drag: DragSession::new(),
            renderers,
        }
    }

    /// The current position.
    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn renderers_mut(&mut self) -> &mut RendererRegistry {
        &mut self.renderers
    }

    /// Read commands until `quit` or end of input, writing replies to `output`.
    ///
    /// Bad commands are logged and skipped; only I/O failures end the loop early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<(), EditorError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let command = match parse_command(trimmed) {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            match self.execute(command, output) {
                Ok(()) => {}
                Err(e @ EditorError::Io { .. }) => return Err(e),
                Err(e) => warn!(error = %e, "command failed"),
            }
            output.flush()?;
        }

        info!("fenedit shutting down");
        Ok(())
    }

    /// Apply one command.
    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        output: &mut W,
    ) -> Result<(), EditorError> {
        match command {
            Command::Position(fen) => self.fen = fen,
            Command::Fen => writeln!(output, "fen {}", self.fen)?,
            Command::Get(square) => match get_piece_at(&self.fen, square) {
                Some(piece) => writeln!(output, "piece {piece}")?,
                None => writeln!(output, "piece none")?,
            },
            Command::Put(square, piece) => {
                self.fen = update_piece_at(&self.fen, square, Some(piece));
            }
            Command::Remove(square) => self.fen = update_piece_at(&self.fen, square, None),
            Command::Move(from, to) => self.fen = move_piece(&self.fen, from, to),
            Command::Clear => self.fen = clear_board(&self.fen),
            Command::Castling(castling) => self.fen = update_castling_rights(&self.fen, &castling),
            Command::Turn(color) => self.fen = update_active_color(&self.fen, color),
            Command::EnPassant(square) => {
                self.fen = update_en_passant(&self.fen, &square, self.config.auto_turn);
            }
            Command::Halfmove(n) => self.fen = set_halfmove_clock(&self.fen, n),
            Command::Fullmove(n) => self.fen = set_fullmove_number(&self.fen, n),
            Command::ValidateFen(fen) => write_validation(output, validate_fen_input(&fen))?,
            Command::ValidateEnPassant(value) => write_validation(
                output,
                validate_en_passant_input(&value, Some(&self.fen)),
            )?,
            Command::Layout(layout) => self.layout = layout,
            Command::Flip => self.config.flipped = !self.config.flipped,
            Command::Drop { piece, x, y } => {
                let geometry = self.geometry()?;
                self.drag.start(DragSource::Bank(piece), x, y);
                self.fen = self.drag.end(&self.fen, x, y, &geometry);
            }
            Command::Drag { from, start, end } => {
                let geometry = self.geometry()?;
                self.drag.start(DragSource::Board(from), start.0, start.1);
                self.drag.update(end.0, end.1);
                self.fen = self.drag.end(&self.fen, end.0, end.1, &geometry);
            }
            Command::Display => self.handle_display(output)?,
            Command::SetOption(option) => self.handle_setoption(option)?,
            Command::Quit => {}
            Command::Unknown(name) => {
                debug!(command = %name, "ignoring unknown command");
                return Ok(());
            }
        }
        debug!(fen = %self.fen, "command applied");
        Ok(())
    }

    fn handle_display<W: Write>(&self, output: &mut W) -> Result<(), EditorError> {
        let board = fen_to_board_state(&parse_fen(&self.fen).placement);
        let grid = self
            .renderers
            .render_board(&self.config.piece_set, &board, self.config.flipped)
            .ok_or_else(|| EditorError::UnknownPieceSet {
                name: self.config.piece_set.clone(),
            })?;
        writeln!(output, "{grid}")?;
        Ok(())
    }

    fn handle_setoption(&mut self, option: EditorOption) -> Result<(), EditorError> {
        match option {
            EditorOption::AutoTurn(on) => self.config.auto_turn = on,
            EditorOption::BorderInset(inset) => {
                DropConfig::new(inset)?;
                self.config.border_inset = inset;
            }
            EditorOption::SquareSize(size) => {
                BoardGeometry::new(self.layout, size, self.config.flipped)?;
                self.config.square_size = size;
            }
            EditorOption::PieceSet(name) => {
                if !self.renderers.contains(&name) {
                    return Err(EditorError::UnknownPieceSet { name });
                }
                self.config.piece_set = name;
            }
        }
        Ok(())
    }

    fn geometry(&self) -> Result<BoardGeometry, EditorError> {
        let drop = DropConfig::new(self.config.border_inset)?;
        let geometry =
            BoardGeometry::new(self.layout, self.config.square_size, self.config.flipped)?
                .with_drop_config(drop);
        Ok(geometry)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn write_validation<W: Write>(output: &mut W, result: InputValidation) -> Result<(), EditorError> {
    match result {
        InputValidation { valid: true, .. } => writeln!(output, "valid")?,
        InputValidation { error: Some(message), .. } => writeln!(output, "invalid {message}")?,
        InputValidation { error: None, .. } => writeln!(output, "incomplete")?,
    }
    Ok(())
}
