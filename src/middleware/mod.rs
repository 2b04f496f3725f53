pub mod gate;

pub use gate::{Gate, Requester, gate_middleware};
