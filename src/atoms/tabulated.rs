/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Table-backed atomic data service
//!
//! [`TabulatedAtomicData`] answers element identity and atomic weight queries
//! from the built-in element tables, and edge energy and cross-section queries
//! from per-element tables supplied by the caller, usually deserialized from
//! JSON exported out of a reference database.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::database;
use super::edge::Edge;
use super::errors::{AtomError, Result};
use super::formula::parse_formula_counts;
use super::service::{AtomicDataService, ElementalComponent, ParsedFormula};

/// Edge energies of one element in keV
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeEnergies {
    pub k: Option<f64>,
    pub l1: Option<f64>,
    pub l2: Option<f64>,
    pub l3: Option<f64>,
}

impl EdgeEnergies {
    pub fn get(&self, edge: Edge) -> Option<f64> {
        match edge {
            Edge::K => self.k,
            Edge::L1 => self.l1,
            Edge::L2 => self.l2,
            Edge::L3 => self.l3,
        }
    }

    pub fn set(&mut self, edge: Edge, energy_kev: f64) {
        let slot = match edge {
            Edge::K => &mut self.k,
            Edge::L1 => &mut self.l1,
            Edge::L2 => &mut self.l2,
            Edge::L3 => &mut self.l3,
        };
        *slot = Some(energy_kev);
    }
}

/// Tabulated data for one element
///
/// `photo` holds `[energy keV, cross section cm^2/g]` points in ascending
/// energy. Two points sharing an energy describe an absorption edge: the first
/// is the value just below the edge, the second the value just above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTable {
    pub symbol: String,
    #[serde(default)]
    pub atomic_weight: Option<f64>,
    #[serde(default)]
    pub edges: EdgeEnergies,
    #[serde(default)]
    pub photo: Vec<[f64; 2]>,
}

impl ElementTable {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            atomic_weight: None,
            edges: EdgeEnergies::default(),
            photo: Vec::new(),
        }
    }

    pub fn with_atomic_weight(mut self, weight: f64) -> Self {
        self.atomic_weight = Some(weight);
        self
    }

    pub fn with_edge(mut self, edge: Edge, energy_kev: f64) -> Self {
        self.edges.set(edge, energy_kev);
        self
    }

    pub fn with_photo(mut self, points: &[[f64; 2]]) -> Self {
        self.photo = points.to_vec();
        self
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: String| AtomError::InvalidTable(format!("{}: {}", self.symbol, reason));

        if let Some(weight) = self.atomic_weight {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(invalid(format!("atomic weight {} is not positive", weight)));
            }
        }
        for edge in Edge::ALL {
            if let Some(energy) = self.edges.get(edge) {
                if !(energy.is_finite() && energy > 0.0) {
                    return Err(invalid(format!("{} edge energy {} is not positive", edge, energy)));
                }
            }
        }
        for point in &self.photo {
            if !point.iter().all(|v| v.is_finite() && *v > 0.0) {
                return Err(invalid(format!("cross-section point {:?} is not positive", point)));
            }
        }
        for window in self.photo.windows(3) {
            if window[0][0] == window[1][0] && window[1][0] == window[2][0] {
                return Err(invalid(format!("more than two points at {} keV", window[0][0])));
            }
        }
        if self.photo.windows(2).any(|w| w[1][0] < w[0][0]) {
            return Err(invalid("cross-section energies are not ascending".to_string()));
        }
        Ok(())
    }
}

/// Atomic data service over in-memory element tables
#[derive(Debug, Clone, Default)]
pub struct TabulatedAtomicData {
    tables: HashMap<u32, ElementTable>,
}

impl TabulatedAtomicData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a service from a JSON array of element tables
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: Vec<ElementTable> = serde_json::from_str(json)?;
        let mut data = Self::new();
        for table in tables {
            data.insert(table)?;
        }
        Ok(data)
    }

    /// Adds or replaces the table for an element
    pub fn insert(&mut self, table: ElementTable) -> Result<()> {
        let atomic_number = self.symbol_to_atomic_number(&table.symbol)?;
        table.validate()?;
        log::trace!(
            "Registered table for {} with {} cross-section points",
            table.symbol,
            table.photo.len()
        );
        self.tables.insert(atomic_number, table);
        Ok(())
    }

    pub fn with_element(mut self, table: ElementTable) -> Result<Self> {
        self.insert(table)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn table(&self, atomic_number: u32) -> Result<&ElementTable> {
        self.tables.get(&atomic_number).ok_or_else(|| {
            AtomError::MissingData(format!("no table for atomic number {}", atomic_number))
        })
    }
}

impl AtomicDataService for TabulatedAtomicData {
    fn parse_formula(&self, formula: &str) -> Result<ParsedFormula> {
        let mut atoms: BTreeMap<u32, f64> = BTreeMap::new();
        for (symbol, count) in parse_formula_counts(formula)? {
            let atomic_number = self.symbol_to_atomic_number(&symbol)?;
            *atoms.entry(atomic_number).or_insert(0.0) += count;
        }

        let masses = atoms
            .into_iter()
            .map(|(z, count)| -> Result<(u32, f64, f64)> {
                Ok((z, count, count * self.atomic_weight(z)?))
            })
            .collect::<Result<Vec<_>>>()?;
        let total: f64 = masses.iter().map(|(_, _, mass)| mass).sum();

        Ok(ParsedFormula::new(
            masses
                .into_iter()
                .map(|(atomic_number, atom_count, mass)| ElementalComponent {
                    atomic_number,
                    mass_fraction: mass / total,
                    atom_count,
                })
                .collect(),
        ))
    }

    fn atomic_weight(&self, atomic_number: u32) -> Result<f64> {
        if let Some(weight) = self
            .tables
            .get(&atomic_number)
            .and_then(|table| table.atomic_weight)
        {
            return Ok(weight);
        }
        database::atomic_weight(atomic_number).ok_or(AtomError::InvalidAtomicNumber(atomic_number))
    }

    fn symbol_to_atomic_number(&self, symbol: &str) -> Result<u32> {
        database::atomic_number_from_symbol(symbol)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))
    }

    fn atomic_number_to_symbol(&self, atomic_number: u32) -> Result<&str> {
        database::element_symbol(atomic_number).ok_or(AtomError::InvalidAtomicNumber(atomic_number))
    }

    fn edge_energy(&self, atomic_number: u32, edge: Edge) -> Result<f64> {
        let table = self.table(atomic_number)?;
        table.edges.get(edge).ok_or_else(|| {
            AtomError::MissingData(format!("no {} edge energy for {}", edge, table.symbol))
        })
    }

    fn photo_cross_section(&self, atomic_number: u32, energy_kev: f64) -> Result<f64> {
        let table = self.table(atomic_number)?;
        log_log_interpolate(&table.photo, energy_kev).ok_or_else(|| {
            AtomError::MissingData(format!(
                "{} keV is outside the cross-section table for {}",
                energy_kev, table.symbol
            ))
        })
    }
}

/// Interpolates linearly in log(energy)/log(value) between bracketing points
fn log_log_interpolate(points: &[[f64; 2]], energy: f64) -> Option<f64> {
    if !(energy.is_finite() && energy > 0.0) {
        return None;
    }
    let idx = points.partition_point(|p| p[0] < energy);
    let hi = points.get(idx)?;
    if hi[0] == energy {
        return Some(hi[1]);
    }
    let lo = points.get(idx.checked_sub(1)?)?;

    let t = (energy.ln() - lo[0].ln()) / (hi[0].ln() - lo[0].ln());
    Some((lo[1].ln() + t * (hi[1].ln() - lo[1].ln())).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn iron() -> ElementTable {
        ElementTable::new("Fe")
            .with_edge(Edge::K, 7.112)
            .with_photo(&[[5.0, 140.0], [7.112, 50.0], [7.112, 400.0], [10.0, 170.0]])
    }

    #[test]
    fn test_interpolation_at_nodes() {
        let points = [[1.0, 100.0], [2.0, 50.0], [4.0, 25.0]];
        assert_relative_eq!(log_log_interpolate(&points, 1.0).unwrap(), 100.0);
        assert_relative_eq!(log_log_interpolate(&points, 2.0).unwrap(), 50.0);
        assert_relative_eq!(log_log_interpolate(&points, 4.0).unwrap(), 25.0);
        // power law 100/E is exact in log-log space
        assert_relative_eq!(
            log_log_interpolate(&points, 3.0).unwrap(),
            100.0 / 3.0,
            epsilon = 1e-9
        );
        assert!(log_log_interpolate(&points, 0.5).is_none());
        assert!(log_log_interpolate(&points, 4.5).is_none());
    }

    #[test]
    fn test_interpolation_across_edge() {
        let table = iron();
        let below = log_log_interpolate(&table.photo, 7.0).unwrap();
        let above = log_log_interpolate(&table.photo, 7.2).unwrap();
        assert!(below < 60.0);
        assert!(above > 350.0);
    }

    #[test]
    fn test_parse_formula_merges_elements() {
        let data = TabulatedAtomicData::new();
        let parsed = data.parse_formula("FeOFe").unwrap();
        assert_eq!(parsed.len(), 2);
        // ascending atomic number
        assert_eq!(parsed.components()[0].atomic_number, 8);
        assert_eq!(parsed.components()[1].atomic_number, 26);
        assert_relative_eq!(parsed.components()[1].atom_count, 2.0);

        let total: f64 = parsed.iter().map(|c| c.mass_fraction).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_symbol() {
        let data = TabulatedAtomicData::new();
        assert!(matches!(
            data.parse_formula("Xx2O"),
            Err(AtomError::UnknownElement(_))
        ));
        assert!(matches!(
            data.clone().with_element(ElementTable::new("Qq")),
            Err(AtomError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_missing_data() {
        let data = TabulatedAtomicData::new().with_element(iron()).unwrap();
        assert_relative_eq!(data.edge_energy(26, Edge::K).unwrap(), 7.112);
        assert!(matches!(data.edge_energy(26, Edge::L3), Err(AtomError::MissingData(_))));
        assert!(matches!(data.edge_energy(8, Edge::K), Err(AtomError::MissingData(_))));
        assert!(matches!(
            data.photo_cross_section(26, 50.0),
            Err(AtomError::MissingData(_))
        ));
    }

    #[test]
    fn test_invalid_tables() {
        let unsorted = ElementTable::new("Fe").with_photo(&[[2.0, 1.0], [1.0, 1.0]]);
        assert!(matches!(unsorted.validate(), Err(AtomError::InvalidTable(_))));

        let negative = ElementTable::new("Fe").with_photo(&[[1.0, -1.0]]);
        assert!(matches!(negative.validate(), Err(AtomError::InvalidTable(_))));

        let triple = ElementTable::new("Fe").with_photo(&[[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]]);
        assert!(matches!(triple.validate(), Err(AtomError::InvalidTable(_))));

        let weight = ElementTable::new("Fe").with_atomic_weight(0.0);
        assert!(matches!(weight.validate(), Err(AtomError::InvalidTable(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"symbol": "Fe", "edges": {"k": 7.112}, "photo": [[5.0, 140.0], [10.0, 170.0]]},
            {"symbol": "O", "atomic_weight": 16.0}
        ]"#;
        let data = TabulatedAtomicData::from_json(json).unwrap();
        assert_eq!(data.len(), 2);
        assert_relative_eq!(data.atomic_weight(8).unwrap(), 16.0);
        assert_relative_eq!(data.atomic_weight(26).unwrap(), 55.845);
        assert!(TabulatedAtomicData::from_json("{").is_err());
    }
}
