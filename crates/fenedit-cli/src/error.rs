//! Editing protocol errors.

use fenedit_core::FenError;
use fenedit_drag::GeometryError;

/// Errors that can occur while parsing or applying an editor command.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A command is missing a required argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// The `position` command is missing `startpos`, `empty` or `fen`.
    #[error("malformed position command: expected startpos, empty or fen")]
    MalformedPosition,

    /// A square or piece token could not be parsed.
    #[error(transparent)]
    Token(#[from] FenError),

    /// The `turn` argument is not `w` or `b`.
    #[error("invalid color: {value}")]
    InvalidColor {
        /// The rejected token.
        value: String,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid value for {param}: {value}")]
    InvalidNumber {
        /// The argument name.
        param: &'static str,
        /// The string that failed to parse.
        value: String,
    },

    /// A FEN given to `position fen` is not well-formed.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The rejected FEN.
        fen: String,
        /// The first structural defect.
        source: FenError,
    },

    /// `setoption` without `name ... value ...`.
    #[error("malformed setoption command")]
    MalformedSetOption,

    /// `setoption` with an option name the editor does not know.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `PieceSet` names a renderer that is not registered.
    #[error("unknown piece set: {name}")]
    UnknownPieceSet {
        /// The requested renderer name.
        name: String,
    },

    /// Board geometry options were rejected.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
