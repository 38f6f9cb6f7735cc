//! Game flow: word selection, rounds and the session that drives them

mod command;
mod round;
pub(crate) mod selector;
mod session;

pub use command::{Command, CommandOutcome};
pub use round::{IDLE_WORD_LENGTH, MAX_ATTEMPTS, Round, RoundOutcome, RoundSnapshot, RoundStatus, SubmitResult};
pub use selector::{IndexSource, MAX_REDRAWS, select_word};
pub use session::Session;
