//! Disk-backed script bank: the numbered repository a deployment pulls its
//! program payloads from.

pub mod bank;
pub mod error;

pub use bank::{ScriptBank, COUNT_FILE, POINTER_FILE};
pub use error::ScriptBankError;
