//! Editor command parsing.

use fenedit_core::{Color, EMPTY_FEN, Piece, STARTING_FEN, Square, validate_fen_structure};
use fenedit_drag::BoardLayout;

use crate::error::EditorError;

/// Options adjustable via `setoption`.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOption {
    /// Infer the side to move whenever an en passant square is set.
    AutoTurn(bool),
    /// Border drawn around the board, in pixels.
    BorderInset(f64),
    /// Edge length of one square, in pixels.
    SquareSize(f64),
    /// Name of the registered renderer used by `display`.
    PieceSet(String),
}

/// A parsed editor command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `position startpos|empty|fen <fen>` -- replace the current FEN.
    Position(String),
    /// `fen` -- print the current FEN.
    Fen,
    /// `get <square>` -- print the piece on a square.
    Get(Square),
    /// `put <square> <piece>` -- place a piece.
    Put(Square, Piece),
    /// `remove <square>` -- empty a square.
    Remove(Square),
    /// `move <from> <to>` -- move a piece, capturing on `to`.
    Move(Square, Square),
    /// `clear` -- remove every piece.
    Clear,
    /// `castling [<field>]` -- write the castling field; no argument clears it.
    Castling(String),
    /// `turn w|b` -- set the side to move.
    Turn(Color),
    /// `ep [<square>]` -- set the en passant field; no argument clears it.
    EnPassant(String),
    /// `halfmove <n>`.
    Halfmove(u32),
    /// `fullmove <n>`.
    Fullmove(u32),
    /// `validate fen <fen>` -- run the FEN input check.
    ValidateFen(String),
    /// `validate ep [<value>]` -- run the en passant input check against the current FEN.
    ValidateEnPassant(String),
    /// `layout <x> <y> <width> <height>` -- where the board is on screen.
    Layout(BoardLayout),
    /// `flip` -- toggle board orientation.
    Flip,
    /// `drop <piece> <x> <y>` -- drop a bank piece at an absolute point.
    Drop { piece: Piece, x: f64, y: f64 },
    /// `drag <square> <x0> <y0> <x1> <y1>` -- drag a board piece between two points.
    Drag {
        from: Square,
        start: (f64, f64),
        end: (f64, f64),
    },
    /// `display` -- print the board with the active piece set.
    Display,
    /// `setoption name <name> value <value>`.
    SetOption(EditorOption),
    /// `quit` -- exit the editor.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, EditorError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "position" => parse_position(args),
        "fen" => Ok(Command::Fen),
        "get" => Ok(Command::Get(parse_square(args, 0, "get")?)),
        "put" => Ok(Command::Put(
            parse_square(args, 0, "put")?,
            arg(args, 1, "put")?.parse()?,
        )),
        "remove" => Ok(Command::Remove(parse_square(args, 0, "remove")?)),
        "move" => Ok(Command::Move(
            parse_square(args, 0, "move")?,
            parse_square(args, 1, "move")?,
        )),
        "clear" => Ok(Command::Clear),
        "castling" => Ok(Command::Castling(optional(args))),
        "turn" => {
            let token = arg(args, 0, "turn")?;
            let color = Color::from_fen_token(token).ok_or_else(|| EditorError::InvalidColor {
                value: token.to_string(),
            })?;
            Ok(Command::Turn(color))
        }
        "ep" => Ok(Command::EnPassant(optional(args))),
        "halfmove" => Ok(Command::Halfmove(parse_number(args, 0, "halfmove")?)),
        "fullmove" => Ok(Command::Fullmove(parse_number(args, 0, "fullmove")?)),
        "validate" => parse_validate(args),
        "layout" => Ok(Command::Layout(BoardLayout::new(
            parse_number(args, 0, "layout")?,
            parse_number(args, 1, "layout")?,
            parse_number(args, 2, "layout")?,
            parse_number(args, 3, "layout")?,
        ))),
        "flip" => Ok(Command::Flip),
        "drop" => Ok(Command::Drop {
            piece: arg(args, 0, "drop")?.parse()?,
            x: parse_number(args, 1, "drop")?,
            y: parse_number(args, 2, "drop")?,
        }),
        "drag" => Ok(Command::Drag {
            from: parse_square(args, 0, "drag")?,
            start: (parse_number(args, 1, "drag")?, parse_number(args, 2, "drag")?),
            end: (parse_number(args, 3, "drag")?, parse_number(args, 4, "drag")?),
        }),
        "display" => Ok(Command::Display),
        "setoption" => parse_setoption(args),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// A FEN may span any number of tokens; it is re-joined with single spaces
/// and must be structurally valid.
fn parse_position(args: &[&str]) -> Result<Command, EditorError> {
    match args.split_first() {
        Some((&"startpos", _)) => Ok(Command::Position(STARTING_FEN.to_string())),
        Some((&"empty", _)) => Ok(Command::Position(EMPTY_FEN.to_string())),
        Some((&"fen", rest)) => {
            let fen = rest.join(" ");
            validate_fen_structure(&fen).map_err(|source| EditorError::InvalidFen {
                fen: fen.clone(),
                source,
            })?;
            Ok(Command::Position(fen))
        }
        _ => Err(EditorError::MalformedPosition),
    }
}

/// Parse `validate fen <fen>` and `validate ep [<value>]`.
fn parse_validate(args: &[&str]) -> Result<Command, EditorError> {
    match args.split_first() {
        Some((&"fen", rest)) => Ok(Command::ValidateFen(rest.join(" "))),
        Some((&"ep", rest)) => Ok(Command::ValidateEnPassant(optional(rest))),
        _ => Err(EditorError::MissingArgument { command: "validate" }),
    }
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(args: &[&str]) -> Result<Command, EditorError> {
    let (name, value) = match args {
        ["name", name, "value", value, ..] => (*name, *value),
        _ => return Err(EditorError::MalformedSetOption),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "autoturn" => EditorOption::AutoTurn(parse_value(value, "AutoTurn")?),
        "borderinset" => EditorOption::BorderInset(parse_value(value, "BorderInset")?),
        "squaresize" => EditorOption::SquareSize(parse_value(value, "SquareSize")?),
        "pieceset" => EditorOption::PieceSet(value.to_string()),
        _ => {
            return Err(EditorError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::SetOption(option))
}

fn arg<'a>(args: &[&'a str], index: usize, command: &'static str) -> Result<&'a str, EditorError> {
    args.get(index).copied().ok_or(EditorError::MissingArgument { command })
}

/// First argument, or an empty string when there is none.
fn optional(args: &[&str]) -> String {
    args.first().copied().unwrap_or_default().to_string()
}

fn parse_square(args: &[&str], index: usize, command: &'static str) -> Result<Square, EditorError> {
    Ok(arg(args, index, command)?.parse()?)
}

fn parse_number<T: std::str::FromStr>(
    args: &[&str],
    index: usize,
    command: &'static str,
) -> Result<T, EditorError> {
    parse_value(arg(args, index, command)?, command)
}

fn parse_value<T: std::str::FromStr>(value: &str, param: &'static str) -> Result<T, EditorError> {
    value.parse().map_err(|_| EditorError::InvalidNumber {
        param,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("fen").unwrap(), Command::Fen);
        assert_eq!(parse_command("clear").unwrap(), Command::Clear);
        assert_eq!(parse_command("flip").unwrap(), Command::Flip);
        assert_eq!(parse_command("display").unwrap(), Command::Display);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("   ").unwrap(), Command::Unknown(String::new()));
        assert_eq!(parse_command("go depth 6").unwrap(), Command::Unknown("go".to_string()));
    }

    #[test]
    fn parse_position_variants() {
        assert_eq!(
            parse_command("position startpos").unwrap(),
            Command::Position(STARTING_FEN.to_string())
        );
        assert_eq!(
            parse_command("position empty").unwrap(),
            Command::Position(EMPTY_FEN.to_string())
        );
        assert_eq!(
            parse_command("position fen 4k3/8/8/8/8/8/8/4K3   w - - 0 1").unwrap(),
            Command::Position("4k3/8/8/8/8/8/8/4K3 w - - 0 1".to_string())
        );
    }

    #[test]
    fn parse_position_rejects_bad_fen() {
        let err = parse_command("position fen 4k3/8/8 w - - 0 1").unwrap_err();
        assert!(matches!(err, EditorError::InvalidFen { .. }));
        assert!(matches!(
            parse_command("position").unwrap_err(),
            EditorError::MalformedPosition
        ));
    }

    #[test]
    fn parse_square_commands() {
        assert_eq!(parse_command("get e4").unwrap(), Command::Get(sq("e4")));
        assert_eq!(
            parse_command("put d5 q").unwrap(),
            Command::Put(sq("d5"), Piece::from_fen_char('q').unwrap())
        );
        assert_eq!(parse_command("remove a1").unwrap(), Command::Remove(sq("a1")));
        assert_eq!(
            parse_command("move e2 e4").unwrap(),
            Command::Move(sq("e2"), sq("e4"))
        );
    }

    #[test]
    fn parse_square_errors() {
        assert!(matches!(
            parse_command("get").unwrap_err(),
            EditorError::MissingArgument { command: "get" }
        ));
        assert!(matches!(parse_command("get z9").unwrap_err(), EditorError::Token(_)));
        assert!(matches!(parse_command("put e4 X").unwrap_err(), EditorError::Token(_)));
    }

    #[test]
    fn parse_field_commands() {
        assert_eq!(parse_command("castling Kq").unwrap(), Command::Castling("Kq".to_string()));
        assert_eq!(parse_command("castling").unwrap(), Command::Castling(String::new()));
        assert_eq!(parse_command("turn b").unwrap(), Command::Turn(Color::Black));
        assert!(matches!(
            parse_command("turn B").unwrap_err(),
            EditorError::InvalidColor { .. }
        ));
        assert_eq!(parse_command("ep e3").unwrap(), Command::EnPassant("e3".to_string()));
        assert_eq!(parse_command("halfmove 12").unwrap(), Command::Halfmove(12));
        assert!(matches!(
            parse_command("fullmove -1").unwrap_err(),
            EditorError::InvalidNumber { param: "fullmove", .. }
        ));
    }

    #[test]
    fn parse_validate_commands() {
        assert_eq!(
            parse_command("validate fen 8/8 w").unwrap(),
            Command::ValidateFen("8/8 w".to_string())
        );
        assert_eq!(
            parse_command("validate fen").unwrap(),
            Command::ValidateFen(String::new())
        );
        assert_eq!(
            parse_command("validate ep e").unwrap(),
            Command::ValidateEnPassant("e".to_string())
        );
        assert!(parse_command("validate").is_err());
    }

    #[test]
    fn parse_pointer_commands() {
        assert_eq!(
            parse_command("layout 0 10 404 404").unwrap(),
            Command::Layout(BoardLayout::new(0.0, 10.0, 404.0, 404.0))
        );
        assert_eq!(
            parse_command("drop N 2 352.5").unwrap(),
            Command::Drop {
                piece: Piece::from_fen_char('N').unwrap(),
                x: 2.0,
                y: 352.5
            }
        );
        assert_eq!(
            parse_command("drag e2 227 327 227 227").unwrap(),
            Command::Drag {
                from: sq("e2"),
                start: (227.0, 327.0),
                end: (227.0, 227.0)
            }
        );
        assert!(parse_command("drag e2 1 2 3").is_err());
    }

    #[test]
    fn parse_setoption_commands() {
        assert_eq!(
            parse_command("setoption name AutoTurn value false").unwrap(),
            Command::SetOption(EditorOption::AutoTurn(false))
        );
        assert_eq!(
            parse_command("setoption name SquareSize value 60").unwrap(),
            Command::SetOption(EditorOption::SquareSize(60.0))
        );
        assert_eq!(
            parse_command("setoption name PieceSet value unicode").unwrap(),
            Command::SetOption(EditorOption::PieceSet("unicode".to_string()))
        );
        assert!(matches!(
            parse_command("setoption name Hash value 16").unwrap_err(),
            EditorError::UnknownOption { .. }
        ));
        assert!(matches!(
            parse_command("setoption AutoTurn true").unwrap_err(),
            EditorError::MalformedSetOption
        ));
    }
}
