//! Attributes computed from attributes that are already set.

use crate::element::Element;
use crate::node::TextNode;

/// Scaling factors used by [`Element::make_elastic`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElasticRatios {
    pub minimum: f64,
    pub maximum: f64,
}

impl ElasticRatios {
    pub const fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }
}

impl Default for ElasticRatios {
    fn default() -> Self {
        Self::new(0.8, 1.4)
    }
}

impl<T: TextNode> Element<T> {
    /// Turns the length in attribute `name` into a range by adding `name.minimum` and
    /// `name.maximum`, each an expression scaling the base value.
    ///
    /// Does nothing when `name` is not set. Applying it again to the same base value
    /// produces the same attributes.
    pub fn make_elastic(&mut self, name: &str, ratios: ElasticRatios) -> &mut Self {
        let Some(base) = self.get_attribute(name).map(str::to_string) else {
            log::trace!("Skipping elastic range for unset attribute '{}'.", name);
            return self;
        };
        self.set_attribute(format!("{}.minimum", name), format!("({}) * {}", base, ratios.minimum));
        self.set_attribute(format!("{}.maximum", name), format!("({}) * {}", base, ratios.maximum));
        self
    }
}
