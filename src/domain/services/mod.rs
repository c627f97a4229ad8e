//! Domain Services

mod prober;

pub use prober::{find_companion, StateProber};
