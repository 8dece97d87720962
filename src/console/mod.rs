//! Console front end: line input, text rendering, registration, game loop.
//!
//! Everything here is generic over `BufRead`/`Write`, so the binary runs it
//! on stdin/stdout and tests run it on in-memory buffers.

pub mod display;
pub mod input;
pub mod register;
pub mod session;

pub use input::{parse_number, Console, NumberInput};
pub use register::register_territories;
pub use session::{Session, SessionOutcome};
