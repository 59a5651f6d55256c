use super::rounding::{pct, round_half_up, round_to};
use crate::core::models::residue::{ResidueClass, class_of};
use crate::core::models::sequence::Sequence;
use crate::core::properties::{
    CHARGE_WEIGHTS, WATER_MASS_DA, hydropathy, is_aromatic, residue_mass,
};
use serde::Serialize;

/// The scalar physicochemical indices of one sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicochemicalMetrics {
    #[serde(rename = "netChargeApproxPH7")]
    pub net_charge: f64,
    pub aromaticity_pct: f64,
    pub aliphatic_index: f64,
    pub molecular_weight_da: i64,
    pub gravy: f64,
    pub longest_hydrophobic_run: usize,
}

impl PhysicochemicalMetrics {
    pub fn compute(sequence: &Sequence) -> Self {
        Self {
            net_charge: net_charge(sequence),
            aromaticity_pct: aromaticity_pct(sequence),
            aliphatic_index: aliphatic_index(sequence),
            molecular_weight_da: molecular_weight(sequence),
            gravy: gravy(sequence),
            longest_hydrophobic_run: longest_hydrophobic_run(sequence),
        }
    }
}

/// Approximate net charge at pH 7, to one decimal.
///
/// Flat per-residue weights (K/R +0.9, H +0.1, D/E -1.0). This is a heuristic and
/// deliberately not a Henderson-Hasselbalch titration.
pub fn net_charge(sequence: &Sequence) -> f64 {
    let charge = CHARGE_WEIGHTS
        .iter()
        .fold(0.0, |acc, &(code, weight)| {
            acc + sequence.count_of(code) as f64 * weight
        });
    round_to(charge, 1)
}

/// Share of F, W and Y, as a one-decimal percentage.
pub fn aromaticity_pct(sequence: &Sequence) -> f64 {
    let aromatic = sequence.iter().filter(|&c| is_aromatic(c)).count();
    pct(aromatic, sequence.len())
}

/// Ikai's aliphatic index, computed from the already rounded mole percentages of
/// A, V, I and L.
pub fn aliphatic_index(sequence: &Sequence) -> f64 {
    let x = |code| pct(sequence.count_of(code), sequence.len());
    let (ala, val, ile, leu) = (x('A'), x('V'), x('I'), x('L'));
    round_to(ala + 2.9 * val + 3.9 * (ile + leu), 1)
}

/// Average molecular weight in whole Daltons.
///
/// One water mass is removed per junction along the full length. Unrecognized
/// characters weigh nothing but still count as positions, so a sequence made
/// mostly of them can come out negative.
pub fn molecular_weight(sequence: &Sequence) -> i64 {
    let mut mass: f64 = sequence.iter().filter_map(residue_mass).sum();
    if sequence.len() > 1 {
        mass -= WATER_MASS_DA * (sequence.len() - 1) as f64;
    }
    round_half_up(mass) as i64
}

/// Grand average of hydropathy (Kyte-Doolittle), to two decimals.
///
/// The mean runs over the full length, so unrecognized characters pull it towards 0.
pub fn gravy(sequence: &Sequence) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let sum: f64 = sequence.iter().map(|c| hydropathy(c).unwrap_or(0.0)).sum();
    round_to(sum / sequence.len() as f64, 2)
}

/// Length of the longest contiguous stretch of hydrophobic residues.
pub fn longest_hydrophobic_run(sequence: &Sequence) -> usize {
    let mut best = 0;
    let mut current = 0;
    for code in sequence.iter() {
        if class_of(code) == Some(ResidueClass::Hydrophobic) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}
