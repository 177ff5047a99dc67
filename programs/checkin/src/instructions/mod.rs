pub mod bulk_check_in;
pub mod check_in;
pub mod get_stats;
pub mod initialize;
pub mod set_config;

pub use bulk_check_in::*;
pub use check_in::*;
pub use get_stats::*;
pub use initialize::*;
pub use set_config::*;
