pub mod fleet;
pub mod orbit;
pub mod projection;
