//! Non-UI services: backend request execution.

pub mod worker;
