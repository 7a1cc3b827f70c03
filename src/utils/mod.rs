//! Frame timing ([`FrameClock`]).

pub mod timing;

pub use timing::FrameClock;
