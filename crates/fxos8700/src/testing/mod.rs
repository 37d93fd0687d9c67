//! Testing infrastructure (mock interfaces, delays, clocks).

pub(crate) mod mock;

pub(crate) use mock::{MockClock, MockDelay, MockInterface};
