pub mod network;
pub mod options;
pub mod units;
pub mod times;
pub mod reactions;
pub mod pipe;
pub mod junction;
pub mod tank;
pub mod reservoir;
pub mod pump;
pub mod valve;
