//! Great-circle measurement in Rhode Islands.
//!
//! - **geo**: `Location` and the haversine distance in miles
//! - **units**: conversion from miles to the 48-mile reference unit
//! - **measurement**: a completed two-point result and its display text
//! - **selection**: the 0/1/2 point selection and its click transitions
//! - **interaction**: the state machine that notifies an observer on every click

pub mod geo;
pub mod interaction;
pub mod measurement;
pub mod selection;
pub mod units;
