use crate::{Command, Event};

/// Handles a command and emits the events it produced, in the order the
/// effects happened.
///
/// Handlers borrow the state they mutate (`&mut self`), so whoever owns that
/// state decides when a handler may run; no two handlers can touch the same
/// store at once.
///
/// The error type is associated because failure is handler-specific; handlers
/// that cannot fail use [`core::convert::Infallible`].
pub trait CommandHandler {
    type Cmd: Command;
    type Ev: Event;
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn handle(&mut self, command: Self::Cmd) -> Result<Vec<Self::Ev>, Self::Error>;
}
