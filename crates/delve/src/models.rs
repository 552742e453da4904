//! These models represent the objects passed around by the agent
//!
//! The transcript we keep while answering a question is made of [`message::Message`]s.
//! Providers convert them to and from their own wire format using to/from helpers,
//! the loop itself only ever sees the internal structs.
pub mod message;
pub mod role;
pub mod tool;
pub mod transcript;
