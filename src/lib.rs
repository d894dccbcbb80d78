//! WUDESIM-RS: reads EPANET input files into a network model for dead-end
//! water quality simulation

pub mod input;
pub mod model;
pub mod constants;
pub mod output;
pub mod error;

pub use error::{load_status, InputError, InputErrorKind};
pub use model::network::Network;
