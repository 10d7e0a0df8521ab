//! Packer configuration.

/// Configuration for the capacity packer.
///
/// # Examples
///
/// ```
/// use dispatch_opt::packer::PackerConfig;
///
/// // Whole-kilogram precision instead of the default two decimals.
/// let config = PackerConfig::default().with_scale_factor(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PackerConfig {
    /// Factor by which real-valued weights and the capacity are
    /// multiplied (then truncated toward zero) to obtain the integer
    /// units indexing the DP table.
    ///
    /// The default of 100 keeps two decimal places of weight precision
    /// and bounds the per-item rounding error at 0.005 weight units.
    /// Raising it refines precision at the cost of a proportionally
    /// larger table: the DP runs in O(n · capacity · scale_factor).
    pub scale_factor: u32,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self { scale_factor: 100 }
    }
}

impl PackerConfig {
    pub fn with_scale_factor(mut self, factor: u32) -> Self {
        self.scale_factor = factor;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.scale_factor == 0 {
            return Err("scale_factor must be positive".into());
        }
        Ok(())
    }
}
