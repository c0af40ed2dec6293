//! Application-level helpers for the update run.

pub mod shutdown;
pub mod statistics;

pub use shutdown::cancel_on_ctrl_c;
pub use statistics::print_update_statistics;
