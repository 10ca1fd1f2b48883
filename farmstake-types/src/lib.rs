pub mod constants;
pub mod error;
pub mod locker;
pub mod primitives;
pub mod staking;
