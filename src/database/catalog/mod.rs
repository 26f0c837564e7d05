//! Named query builders. Every function here is pure: it packages statement
//! text and positional values into a `QueryDescriptor` and never touches the
//! store itself.

pub mod activities;
pub mod attendance;
pub mod lookups;
pub mod staff;
pub mod students;
