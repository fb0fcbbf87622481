use super::error::{FootprintError, Result};
use super::footprint;
use super::io::ArgumentGroup;
use super::types::Category;
use log::debug;

type Formula = fn(&[f64]) -> f64;

struct Dispatch {
    category: Category,
    formula: Formula,
}

// Arguments reach a formula only after their count matches the category's
// arity, so the indexing below cannot go out of bounds.
const DISPATCH_TABLE: [Dispatch; Category::COUNT] = [
    Dispatch {
        category: Category::Utilities,
        formula: |args: &[f64]| footprint::fp_of_utilities(args[0], args[1]),
    },
    Dispatch {
        category: Category::University,
        formula: |args: &[f64]| footprint::fp_of_studies(args[0]),
    },
    Dispatch {
        category: Category::Computing,
        formula: |args: &[f64]| {
            footprint::fp_of_computing(args[0], args[1], args[2], args[3], args[4])
        },
    },
    Dispatch {
        category: Category::Diet,
        formula: |args: &[f64]| footprint::fp_of_diet(args[0], args[1], args[2], args[3]),
    },
    Dispatch {
        category: Category::Transportation,
        formula: |args: &[f64]| {
            footprint::fp_of_transportation(args[0], args[1], args[2], args[3])
        },
    },
    Dispatch {
        category: Category::Travel,
        formula: |args: &[f64]| {
            footprint::fp_of_travel(args[0], args[1], args[2], args[3], args[4])
        },
    },
];

/// Tonnes of CO2E for every category, always in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    tonnes: [f64; Category::COUNT],
}

impl Footprint {
    pub fn get(&self, category: Category) -> f64 {
        self.tonnes[category.index()]
    }

    pub fn total(&self) -> f64 {
        self.tonnes.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().copied().zip(self.tonnes.iter().copied())
    }
}

/// Runs the matching formula over one group of arguments.
pub fn evaluate(group: &ArgumentGroup) -> Result<f64> {
    let dispatch = &DISPATCH_TABLE[group.category.index()];
    let expected = dispatch.category.arity();

    if group.values.len() != expected {
        return Err(FootprintError::ArityMismatch {
            category: dispatch.category,
            expected,
            actual: group.values.len(),
        });
    }

    Ok((dispatch.formula)(&group.values))
}

/// Evaluates each group as it arrives and assembles the footprint. The first
/// error aborts the computation; a category with no group is an arity
/// mismatch with nothing supplied.
pub fn compute<I>(groups: I) -> Result<Footprint>
where
    I: IntoIterator<Item = Result<ArgumentGroup>>,
{
    let mut slots: [Option<f64>; Category::COUNT] = [None; Category::COUNT];

    for group in groups {
        let group = group?;
        let slot = &mut slots[group.category.index()];
        if slot.is_some() {
            return Err(FootprintError::DuplicateSection {
                category: group.category,
            });
        }

        let tonnes = evaluate(&group)?;
        debug!("{}: {} tonnes CO2E", group.category, tonnes);
        *slot = Some(tonnes);
    }

    let mut tonnes = [0.0; Category::COUNT];
    for (category, slot) in Category::ALL.iter().zip(slots) {
        tonnes[category.index()] = slot.ok_or(FootprintError::ArityMismatch {
            category: *category,
            expected: category.arity(),
            actual: 0,
        })?;
    }

    Ok(Footprint { tonnes })
}

#[cfg(test)]
pub(crate) fn footprint_from(tonnes: [f64; Category::COUNT]) -> Footprint {
    Footprint { tonnes }
}
