/// Tunables threaded explicitly through the builder, never read from
/// process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderConfig {
    /// Fuzzy-comparison tolerance, `ε`.
    pub tolerance: f64,
    /// Prefix prepended to attribute keys.
    pub attributes_prefix: String,
    /// EPSG code of the coordinate reference system the input was
    /// expressed in (0 = unset). Not used by the core's own geometry, only
    /// carried through as an attribute for the downstream writer.
    pub crs_epsg: u32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig { tolerance: 1.0e-7, attributes_prefix: "opendrive_".into(), crs_epsg: 0 }
    }
}
