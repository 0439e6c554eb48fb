use super::config::RuleTable;
use super::factors::Factor;
use crate::registry::{CountrySystemDescriptor, LegislatureType, SystemType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Non-negative weight per factor. Totals are not forced to 1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightVector(BTreeMap<Factor, f64>);

impl WeightVector {
    pub fn get(&self, factor: Factor) -> Option<f64> {
        self.0.get(&factor).copied()
    }

    pub fn contains(&self, factor: Factor) -> bool {
        self.0.contains_key(&factor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        self.0.iter().map(|(factor, weight)| (*factor, *weight))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Same proportions rescaled to sum to 1. An all-zero vector is returned as is.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return self.clone();
        }
        Self(
            self.0
                .iter()
                .map(|(factor, weight)| (*factor, weight / total))
                .collect(),
        )
    }

    fn set(&mut self, factor: Factor, weight: f64) {
        self.0.insert(factor, weight);
    }

    fn scale(&mut self, factor: f64) {
        self.0.values_mut().for_each(|weight| *weight *= factor);
    }
}

impl FromIterator<(Factor, f64)> for WeightVector {
    fn from_iter<T: IntoIterator<Item = (Factor, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Pure descriptor-to-weights pipeline over one rule table.
#[derive(Debug, Clone, Copy)]
pub struct WeightDeriver {
    table: &'static RuleTable,
}

impl WeightDeriver {
    pub fn new(table: &'static RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static RuleTable {
        self.table
    }

    /// baseline → system-type override → bicameral redistribution.
    pub fn derive(&self, descriptor: &CountrySystemDescriptor) -> WeightVector {
        let weights = self.baseline();
        let weights = self.apply_system_override(weights, descriptor.system_type);
        self.apply_chamber_redistribution(weights, descriptor.legislature_type)
    }

    pub fn baseline(&self) -> WeightVector {
        self.table.baseline.entries().into_iter().collect()
    }

    pub fn apply_system_override(
        &self,
        mut weights: WeightVector,
        system: SystemType,
    ) -> WeightVector {
        if let Some(rule) = self.table.override_for(system) {
            for (factor, weight) in rule.weights {
                weights.set(*factor, *weight);
            }
        }
        weights
    }

    pub fn apply_chamber_redistribution(
        &self,
        mut weights: WeightVector,
        legislature: LegislatureType,
    ) -> WeightVector {
        let Some(chambers) = self.table.chambers else {
            return weights;
        };
        if legislature != LegislatureType::Bicameral {
            return weights;
        }

        weights.scale(chambers.scale);
        weights.set(Factor::UpperHouseSupport, chambers.upper_house);
        weights.set(Factor::LowerHouseSupport, chambers.lower_house);
        weights
    }
}
