pub mod error;
pub mod gate;
pub mod interpreter;
pub mod parser;
pub mod session;
pub mod todo;
pub mod transcript;

pub use gate::{GateMode, InputEcho, PrivilegeGate, CONFIRMATION_TOKEN, ELEVATION_KEYWORD};
pub use session::{Effect, HostSignal, Session, CLOSE_DELAY, RESTART_DELAY};
pub use transcript::{Line, Transcript};
