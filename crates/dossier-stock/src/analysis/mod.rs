//! Dossier sections built on top of the provider traits.

mod qualitative;
mod quantitative;
mod sector;

pub use qualitative::QualitativeAnalysis;
pub use quantitative::QuantitativeAnalysis;
pub use sector::SectorAnalysis;
