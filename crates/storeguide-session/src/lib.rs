//! Dialogue session state machine and navigation stepper.
//!
//! [`session::Session`] owns one conversation's mutable state and maps
//! each incoming command to spoken replies plus at most one side effect
//! the caller must perform (camera toggle, external product extraction,
//! route computation). The session itself never does IO: external call
//! results are fed back through [`session::Session::apply_interpretation`],
//! [`session::Session::install_route`] and the corresponding failure
//! methods, which keeps the turn loop ordinary sequential code and the
//! machine fully testable offline.

pub mod command;
pub mod interpret;
pub mod session;
pub mod speech;
pub mod stepper;
pub mod turn;

pub use command::Command;
pub use interpret::{ChatTurn, Intent, Interpretation};
pub use session::{Session, SessionPhase};
pub use turn::{SideEffect, Turn};
