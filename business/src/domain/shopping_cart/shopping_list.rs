use std::fmt;

use indexmap::IndexMap;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::recipe::model::UsedIngredient;

/// Identity under which ingredient amounts are summed.
///
/// Units are compared literally, so `flour (g)` and `flour (kg)` are two
/// different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregationKey {
    pub name: String,
    pub measurement_unit: String,
}

impl From<&Ingredient> for AggregationKey {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            measurement_unit: ingredient.measurement_unit.clone(),
        }
    }
}

/// One row of the shopping list: a key and the total amount to buy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationLine {
    pub key: AggregationKey,
    pub amount: u64,
}

impl fmt::Display for AggregationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}",
            self.key.name, self.key.measurement_unit, self.amount
        )
    }
}

/// Accumulates ingredient usages into per-key totals.
///
/// Lines come out in the order their key was first seen; nothing is sorted.
#[derive(Debug, Default)]
pub struct ShoppingListAggregator {
    totals: IndexMap<AggregationKey, u64>,
}

impl ShoppingListAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, used: &UsedIngredient) {
        *self
            .totals
            .entry(AggregationKey::from(&used.ingredient))
            .or_insert(0) += u64::from(used.amount);
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn into_lines(self) -> Vec<AggregationLine> {
        self.totals
            .into_iter()
            .map(|(key, amount)| AggregationLine { key, amount })
            .collect()
    }
}

impl<'a> Extend<&'a UsedIngredient> for ShoppingListAggregator {
    fn extend<I: IntoIterator<Item = &'a UsedIngredient>>(&mut self, iter: I) {
        for used in iter {
            self.add(used);
        }
    }
}

/// Formats lines as `"<name> (<unit>) - <amount>"` paragraphs.
pub fn to_text_lines(lines: &[AggregationLine]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}
