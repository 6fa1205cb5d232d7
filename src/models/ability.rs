//! Ability (jutsu) model

use super::ModelError;

/// A named technique with a chakra cost and a free-form effect description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    name: String,
    chakra_cost: u32,
    effect: String,
}

impl Ability {
    /// Create an ability. The name must contain at least one non-whitespace character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shinobi_roster::models::Ability;
    ///
    /// let fireball = Ability::new("Fireball", 20, "burns").unwrap();
    /// assert_eq!(fireball.chakra_cost(), 20);
    /// assert!(Ability::new("  ", 5, "nothing").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        chakra_cost: u32,
        effect: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName("ability".to_string()));
        }
        Ok(Self::preset(name, chakra_cost, effect))
    }

    /// Construct from values known to be valid (factory presets)
    pub(crate) fn preset(name: impl Into<String>, chakra_cost: u32, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chakra_cost,
            effect: effect.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chakra_cost(&self) -> u32 {
        self.chakra_cost
    }

    pub fn effect(&self) -> &str {
        &self.effect
    }
}
