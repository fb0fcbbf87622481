//! Annual personal carbon footprint, in tonnes of CO2E, from a sectioned
//! lifestyle questionnaire.

pub mod calculator;
pub mod conversion;
pub mod error;
pub mod footprint;
pub mod io;
pub mod report;
pub mod types;

pub use error::{FootprintError, Result};
