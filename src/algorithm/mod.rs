/// Input fingerprints
pub mod fingerprint;
/// Generation pipeline tying fingerprint, color, layout and rasterization together
pub mod generator;
/// Symmetric cell layout with minimum-coverage fallback
pub mod layout;
