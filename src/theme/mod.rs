//! Theme for Heart Card.

mod styles;

pub use styles::GLOBAL_STYLES;
