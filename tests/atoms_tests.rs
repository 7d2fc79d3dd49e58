/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

mod common;

use approx::assert_relative_eq;
use catmass::atoms::{AtomError, AtomicDataService, Edge, ElementTable, TabulatedAtomicData};
use rstest::rstest;

#[test]
fn test_fe2o3_mass_fractions() -> anyhow::Result<()> {
    let data = common::data();
    let parsed = data.parse_formula("Fe2O3")?;

    assert_eq!(parsed.len(), 2);
    let oxygen = parsed.component(8).unwrap();
    let iron = parsed.component(26).unwrap();
    assert_relative_eq!(oxygen.atom_count, 3.0);
    assert_relative_eq!(iron.atom_count, 2.0);

    let total = 2.0 * 55.845 + 3.0 * 15.999;
    assert_relative_eq!(iron.mass_fraction, 2.0 * 55.845 / total, epsilon = 1e-12);
    assert_relative_eq!(oxygen.mass_fraction, 3.0 * 15.999 / total, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_parsing_needs_no_tables() -> anyhow::Result<()> {
    // Pd has no registered table; identity and weight come from the built-in tables
    let data = TabulatedAtomicData::new();
    let parsed = data.parse_formula("Pd(NH3)4Cl2")?;
    let atomic_numbers: Vec<u32> = parsed.iter().map(|c| c.atomic_number).collect();
    assert_eq!(atomic_numbers, vec![1, 7, 17, 46]);
    assert_relative_eq!(parsed.component(1).unwrap().atom_count, 12.0);
    Ok(())
}

#[rstest]
#[case("Fe", 26)]
#[case("O", 8)]
#[case("Pt", 78)]
#[case("Lr", 103)]
fn test_symbol_lookup(#[case] symbol: &str, #[case] atomic_number: u32) {
    let data = TabulatedAtomicData::new();
    assert_eq!(data.symbol_to_atomic_number(symbol).unwrap(), atomic_number);
    assert_eq!(data.atomic_number_to_symbol(atomic_number).unwrap(), symbol);
}

#[rstest]
#[case("Xx")]
#[case("FE")]
#[case("Rf")]
fn test_unknown_symbol(#[case] symbol: &str) {
    let data = TabulatedAtomicData::new();
    assert!(matches!(
        data.symbol_to_atomic_number(symbol),
        Err(AtomError::UnknownElement(_))
    ));
}

#[rstest]
#[case("")]
#[case("Fe2O3(")]
#[case("Fe2-O3")]
#[case("Fe_2")]
fn test_invalid_formula(#[case] formula: &str) {
    let data = common::data();
    assert!(matches!(
        data.parse_formula(formula),
        Err(AtomError::InvalidFormula(_))
    ));
}

#[test]
fn test_edge_energies_from_tables() {
    let data = common::data();
    assert_relative_eq!(data.edge_energy(26, Edge::K).unwrap(), 7.112);
    assert_relative_eq!(data.edge_energy(78, Edge::L3).unwrap(), 11.564);
    assert!(matches!(
        data.edge_energy(8, Edge::K),
        Err(AtomError::MissingData(_))
    ));
}

#[test]
fn test_cross_section_jumps_at_edge() {
    let data = common::data();
    let below = data.photo_cross_section(26, 7.062).unwrap();
    let above = data.photo_cross_section(26, 7.162).unwrap();
    assert_relative_eq!(below, 60.0, epsilon = 1e-9);
    assert_relative_eq!(above, 400.0, epsilon = 1e-9);
}

#[test]
fn test_insert_replaces_table() -> anyhow::Result<()> {
    let mut data = common::data();
    let count = data.len();
    data.insert(
        ElementTable::new("Fe")
            .with_edge(Edge::K, 7.1)
            .with_atomic_weight(56.0),
    )?;
    assert_eq!(data.len(), count);
    assert_relative_eq!(data.edge_energy(26, Edge::K)?, 7.1);
    assert_relative_eq!(data.atomic_weight(26)?, 56.0);
    Ok(())
}

#[test]
fn test_bad_json_tables() {
    assert!(matches!(
        TabulatedAtomicData::from_json("not json"),
        Err(AtomError::Json(_))
    ));
    assert!(matches!(
        TabulatedAtomicData::from_json(r#"[{"symbol": "Fe", "photo": [[2.0, 1.0], [1.0, 2.0]]}]"#),
        Err(AtomError::InvalidTable(_))
    ));
}
