//! Poll loop: one fetch → validate → translate → notify pass per cycle, driven
//! on a fixed period.

pub mod cycle;
pub mod failure;
pub mod scheduler;

#[cfg(test)]
mod test_support;

pub use cycle::PollCycle;
pub use failure::CycleFailure;
pub use scheduler::{Phase, Scheduler};
