pub mod analyze;
pub mod describe;
pub mod motifs;
pub mod samples;
