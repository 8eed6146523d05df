pub mod definitions;
pub mod misc;
pub mod token;
pub mod contract;
