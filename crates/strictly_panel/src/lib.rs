//! Host-side panel for the LED tic-tac-toe board.
//!
//! Supplies the collaborators around the `strictly_ledgame` engine: switch
//! debouncing, the shift-register display transport, the status log and
//! the poll-loop controller that ties them together.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod error;
mod input;
mod transport;

pub mod script;
pub mod status;
pub mod terminal;

pub use config::PanelConfig;
pub use controller::{Controller, PollReport};
pub use error::{ConfigError, PanelError, ScriptError, TransportError};
pub use input::{Button, ButtonBank, Debouncer, Levels};
pub use script::{Press, Script, replay};
pub use transport::{
    BitBangTransport, OutputPins, ShiftRegisterChain, SimulatedPins, SimulatedTransport, Transport,
};
