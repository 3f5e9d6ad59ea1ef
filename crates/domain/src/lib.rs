#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod aerobic;
pub mod catalog;
pub mod chain;

mod assembler;
mod error;
mod exercise;
mod generator;
mod goal;
mod profile;
mod progression;
mod safety;
mod selector;
mod suggestion;
mod training;

pub use aerobic::{Activity, AerobicMode, AerobicPreference, AerobicSession};
pub use assembler::*;
pub use catalog::{CATALOG_VERSION, ExerciseVariant};
pub use chain::ProgressionChain;
pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use goal::*;
pub use profile::*;
pub use progression::*;
pub use safety::*;
pub use selector::*;
pub use suggestion::*;
pub use training::*;
