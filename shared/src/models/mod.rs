//! Domain models for the Procurement Admin Platform

mod catalog;
mod delivery;
mod manual;
mod matching;
mod notification;
mod order;
mod outbound;
mod reception;
mod supplier;

pub use catalog::*;
pub use delivery::*;
pub use manual::*;
pub use matching::*;
pub use notification::*;
pub use order::*;
pub use outbound::*;
pub use reception::*;
pub use supplier::*;
