/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # catmass
//!
//! Stoichiometry and X-ray absorption sample preparation for catalyst and
//! materials samples measured at synchrotron beamlines.
//!
//! Given chemical formulas and metal loadings or dilution ratios, the crate
//! builds the combined elemental formula of a sample. Given that formula, an
//! absorbing element and the beam geometry, it returns the absorption edge
//! energy, the sample mass needed for a target absorption length, and the
//! expected transmission edge step.
//!
//! Atomic data (formula parsing, atomic weights, edge energies, cross
//! sections) comes from an [`AtomicDataService`]. [`TabulatedAtomicData`] is
//! a service over caller-supplied tables.
//!
//! ```no_run
//! use catmass::{SamplePlanner, TabulatedAtomicData};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let tables = "[]";
//! let data = TabulatedAtomicData::from_json(tables)?;
//! let planner = SamplePlanner::new(&data);
//!
//! let sample = planner.supported_metal_formula("Pt", 1.0, "Al2O3")?;
//! let result = planner.edge_mass_step(&sample, "Pt", "L3", 1.3)?;
//! println!("{} eV, {:.1} mg, step {:.2}", result.edge_energy_ev, result.mass_mg, result.edge_step);
//! # Ok(())
//! # }
//! ```

pub mod atoms;
pub mod sample;
pub mod stoich;
pub mod utils;
pub mod xas;

pub use atoms::{AtomicDataService, Edge, ElementTable, TabulatedAtomicData};
pub use sample::{EdgeRequest, ErrorKind, SampleError, SamplePlanner};
pub use xas::{AbsorptionConfig, AbsorptionResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
