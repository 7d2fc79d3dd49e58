/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic data service boundary
//!
//! Everything tabulated (formula parsing, atomic weights, edge energies and
//! photoabsorption cross sections) is reached through [`AtomicDataService`].
//! The stoichiometry and absorption code never holds atomic data of its own.

use super::edge::Edge;
use super::errors::{AtomError, Result};

/// One element of a parsed formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementalComponent {
    /// Atomic number (1-103)
    pub atomic_number: u32,
    /// Fraction of the formula mass carried by this element
    pub mass_fraction: f64,
    /// Number of atoms of this element in the formula
    pub atom_count: f64,
}

/// Elements of a formula as reported by a data service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFormula {
    components: Vec<ElementalComponent>,
}

impl ParsedFormula {
    pub fn new(components: Vec<ElementalComponent>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[ElementalComponent] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementalComponent> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Finds the component for an atomic number
    pub fn component(&self, atomic_number: u32) -> Option<&ElementalComponent> {
        self.components
            .iter()
            .find(|c| c.atomic_number == atomic_number)
    }

    /// Atomic number of the first element, used when a formula names a single element
    pub fn first_atomic_number(&self) -> Result<u32> {
        self.components
            .first()
            .map(|c| c.atomic_number)
            .ok_or_else(|| AtomError::InvalidFormula("formula has no elements".to_string()))
    }
}

/// Source of tabulated atomic physics data
///
/// Implementations must be free of side effects; callers may share one
/// service between threads and call it concurrently.
pub trait AtomicDataService: Send + Sync {
    /// Parses formula text into elements with mass fractions and atom counts
    ///
    /// Repeated elements are merged into a single component.
    fn parse_formula(&self, formula: &str) -> Result<ParsedFormula>;

    /// Atomic weight in g/mol
    fn atomic_weight(&self, atomic_number: u32) -> Result<f64>;

    fn symbol_to_atomic_number(&self, symbol: &str) -> Result<u32>;

    fn atomic_number_to_symbol(&self, atomic_number: u32) -> Result<&str>;

    /// Edge energy in keV
    fn edge_energy(&self, atomic_number: u32, edge: Edge) -> Result<f64>;

    /// Photoabsorption cross section in cm^2/g at an energy in keV
    fn photo_cross_section(&self, atomic_number: u32, energy_kev: f64) -> Result<f64>;
}
