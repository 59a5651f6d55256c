//! Per-residue physicochemical constants.
//!
//! Only the 20 canonical codes carry values. Lookups for any other character
//! report "absent" and the metric formulas treat that as a zero contribution.

use phf::{Map, Set, phf_map, phf_set};

/// Mass lost per peptide bond, in Daltons.
pub const WATER_MASS_DA: f64 = 18.015;

/// Average residue masses in Daltons (residue form, water already removed per bond).
#[rustfmt::skip]
static AVERAGE_RESIDUE_MASS: Map<char, f64> = phf_map! {
    'A' => 71.0788,  'R' => 156.1875, 'N' => 114.1038, 'D' => 115.0886, 'C' => 103.1388,
    'Q' => 128.1307, 'E' => 129.1155, 'G' => 57.0519,  'H' => 137.1411, 'I' => 113.1594,
    'L' => 113.1594, 'K' => 128.1741, 'M' => 131.1926, 'F' => 147.1766, 'P' => 97.1167,
    'S' => 87.0782,  'T' => 101.1051, 'W' => 186.2132, 'Y' => 163.1760, 'V' => 99.1326,
};

/// Kyte-Doolittle (1982) hydropathy scale.
#[rustfmt::skip]
static KYTE_DOOLITTLE: Map<char, f64> = phf_map! {
    'A' => 1.8,  'R' => -4.5, 'N' => -3.5, 'D' => -3.5, 'C' => 2.5,
    'Q' => -3.5, 'E' => -3.5, 'G' => -0.4, 'H' => -3.2, 'I' => 4.5,
    'L' => 3.8,  'K' => -3.9, 'M' => 1.9,  'F' => 2.8,  'P' => -1.6,
    'S' => -0.8, 'T' => -0.7, 'W' => -0.9, 'Y' => -1.3, 'V' => 4.2,
};

static AROMATIC_RESIDUES: Set<char> = phf_set! { 'F', 'W', 'Y' };

/// Approximate charge per residue at pH 7, in summation order.
///
/// A flat heuristic (K/R +0.9, H +0.1, D/E -1.0), not a pKa-based titration.
pub const CHARGE_WEIGHTS: [(char, f64); 5] = [
    ('K', 0.9),
    ('R', 0.9),
    ('H', 0.1),
    ('D', -1.0),
    ('E', -1.0),
];

#[inline]
pub fn residue_mass(code: char) -> Option<f64> {
    AVERAGE_RESIDUE_MASS.get(&code).copied()
}

#[inline]
pub fn hydropathy(code: char) -> Option<f64> {
    KYTE_DOOLITTLE.get(&code).copied()
}

#[inline]
pub fn is_aromatic(code: char) -> bool {
    AROMATIC_RESIDUES.contains(&code)
}
