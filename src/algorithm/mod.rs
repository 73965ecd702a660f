/// Candidate set tracking for unresolved cells
pub mod candidates;
/// Host-facing execution controller
pub mod controller;
/// Events emitted while a layout is generated
pub mod events;
/// Resumable generation process state machine
pub mod process;
/// Observation, collapse, and propagation core
pub mod solver;
