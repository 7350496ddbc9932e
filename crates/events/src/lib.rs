//! Commands, events and the envelope that sequences them within a session.

pub mod command;
pub mod envelope;
pub mod event;
pub mod handler;

pub use command::Command;
pub use envelope::EventEnvelope;
pub use event::Event;
pub use handler::CommandHandler;
