//! Errors raised while running a game session.

use derive_more::{Display, Error, From};

/// Failure that ends a play session.
///
/// Refused moves and unreadable input are not errors; the loop handles
/// them by asking again.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// Input ran out before the game reached a terminal state.
    #[display("input closed before the game finished")]
    InputClosed,

    /// Reading or writing the console failed.
    #[display("console I/O failed: {}", _0)]
    #[from]
    Io(std::io::Error),
}
