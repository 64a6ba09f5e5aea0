//! core computations behind a weather dashboard: the globe the dashboard
//! spins, the satellites it flies, and the forecast slices it displays

pub mod error;
pub mod forecast;
pub mod globe;
pub mod units;
pub mod vars;
