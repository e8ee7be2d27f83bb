//! Common, shared types.

pub mod layers;
pub mod state;
pub mod time_scale;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
