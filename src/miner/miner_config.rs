use crate::Item;
use crate::constraints::{CannotTogetherGroup, ConstraintSet};
use crate::error::{ConfigError, MiningError};

/// A configuration object for an MS-Apriori mining run.
///
/// All tunables live in `[0, 1]` and default to the reference values:
/// `ls = 0.01`, `beta = 0.5`, `sup_dif_allowed = 1.0` (no effective bound).
/// The configuration is immutable once handed to the driver — there is no
/// ambient state to mutate mid-run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinerConfig {
    /// Least support: the floor below which no item's MIS may fall.
    pub ls: f64,
    /// Scale factor turning an item's own support into its MIS.
    pub beta: f64,
    /// Maximum allowed difference between the fractional supports of the two
    /// items joined by any candidate-generation step.
    pub sup_dif_allowed: f64,
    /// Declarative item constraints.
    pub constraints: ConstraintSet,
}

impl Default for MinerConfig {
    fn default() -> Self {
        MinerConfig {
            ls: 0.01,
            beta: 0.5,
            sup_dif_allowed: 1.0,
            constraints: ConstraintSet::default(),
        }
    }
}

impl MinerConfig {
    /// Create a configuration with the reference defaults.
    pub fn new() -> MinerConfig {
        MinerConfig::default()
    }

    /// Set the least-support floor (default: 0.01).
    pub fn ls(mut self, ls: f64) -> Self {
        self.ls = ls;
        self
    }

    /// Set the MIS scale factor (default: 0.5).
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the support-difference bound (default: 1.0).
    pub fn sup_dif_allowed(mut self, sup_dif_allowed: f64) -> Self {
        self.sup_dif_allowed = sup_dif_allowed;
        self
    }

    /// Set the must-have items (default: none).
    pub fn must_have(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.constraints.must_have = items.into_iter().collect();
        self
    }

    /// Add one cannot-be-together group (default: none).
    pub fn cannot_together(mut self, group: CannotTogetherGroup) -> Self {
        self.constraints.cannot_together.push(group);
        self
    }

    /// Fail fast on tunables outside `[0, 1]` and on malformed constraint
    /// groups. Mining never starts from an invalid configuration.
    pub fn validate(&self) -> Result<(), MiningError> {
        for (name, value) in [
            ("ls", self.ls),
            ("beta", self.beta),
            ("sup_dif_allowed", self.sup_dif_allowed),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::TunableOutOfRange { name, value }.into());
            }
        }
        self.constraints.validate()?;
        Ok(())
    }
}
