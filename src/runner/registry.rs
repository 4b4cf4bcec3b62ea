//! Explicit exercise registry
//!
//! Exercises are listed here once, by hand. Lookup is by [`ExerciseId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::dataset::Dataset;
use crate::report::ReportSink;

use super::error::RunnerError;
use super::exercises;

/// Identifier of one of the ten exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExerciseId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
    Q9,
    Q10,
}

impl ExerciseId {
    pub const ALL: [ExerciseId; 10] = [
        ExerciseId::Q1,
        ExerciseId::Q2,
        ExerciseId::Q3,
        ExerciseId::Q4,
        ExerciseId::Q5,
        ExerciseId::Q6,
        ExerciseId::Q7,
        ExerciseId::Q8,
        ExerciseId::Q9,
        ExerciseId::Q10,
    ];

    /// 1-based exercise number
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

impl FromStr for ExerciseId {
    type Err = RunnerError;

    /// Accepts `Q3`, `q3`, `3` and `linq3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("linq")
            .or_else(|| lower.strip_prefix('q'))
            .unwrap_or(&lower);

        digits
            .parse::<usize>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| RunnerError::UnknownExercise(s.to_string()))
    }
}

/// Signature every exercise shares
pub type ExerciseFn = fn(&Dataset, &ReportConfig, &mut dyn ReportSink);

/// A registered exercise
#[derive(Clone, Copy)]
pub struct Exercise {
    pub id: ExerciseId,
    pub title: &'static str,
    pub description: &'static str,
    pub run: ExerciseFn,
}

impl fmt::Debug for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exercise")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Table of all exercises in id order
#[derive(Debug, Clone)]
pub struct Registry {
    exercises: Vec<Exercise>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        let exercises = vec![
            Exercise {
                id: ExerciseId::Q1,
                title: "Task 1",
                description: "Customers with total orders greater than x",
                run: exercises::customer_totals,
            },
            Exercise {
                id: ExerciseId::Q2,
                title: "Task 2",
                description: "Customers with same country and city",
                run: exercises::customer_suppliers,
            },
            Exercise {
                id: ExerciseId::Q3,
                title: "Task 3",
                description: "Customers with an order greater than x",
                run: exercises::large_order_customers,
            },
            Exercise {
                id: ExerciseId::Q4,
                title: "Task 4",
                description: "Customers by year and month",
                run: exercises::first_orders,
            },
            Exercise {
                id: ExerciseId::Q5,
                title: "Task 5",
                description: "Customers ordered by year, month, total orders, customer id",
                run: exercises::ranked_first_orders,
            },
            Exercise {
                id: ExerciseId::Q6,
                title: "Task 6",
                description: "Customers without region or without operator code",
                run: exercises::incomplete_contacts,
            },
            Exercise {
                id: ExerciseId::Q7,
                title: "Task 7",
                description: "Products grouped by category",
                run: exercises::products_by_category,
            },
            Exercise {
                id: ExerciseId::Q8,
                title: "Task 8",
                description: "Products grouped by price: cheap, average price, expensive",
                run: exercises::products_by_price,
            },
            Exercise {
                id: ExerciseId::Q9,
                title: "Task 9",
                description: "Average total order for each city",
                run: exercises::city_averages,
            },
            Exercise {
                id: ExerciseId::Q10,
                title: "Task 10",
                description: "Clients activity statistic by month and year",
                run: exercises::activity_statistics,
            },
        ];

        Self { exercises }
    }

    pub fn get(&self, id: ExerciseId) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Resolve a user-supplied name such as `Q3` or `3`.
    pub fn lookup(&self, name: &str) -> Result<&Exercise, RunnerError> {
        let id: ExerciseId = name.parse()?;
        self.get(id)
            .ok_or_else(|| RunnerError::UnknownExercise(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepted_spellings() {
        assert_eq!("Q3".parse::<ExerciseId>().unwrap(), ExerciseId::Q3);
        assert_eq!("q10".parse::<ExerciseId>().unwrap(), ExerciseId::Q10);
        assert_eq!("7".parse::<ExerciseId>().unwrap(), ExerciseId::Q7);
        assert_eq!("Linq1".parse::<ExerciseId>().unwrap(), ExerciseId::Q1);
        assert_eq!(" q2 ".parse::<ExerciseId>().unwrap(), ExerciseId::Q2);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        for bad in ["Q0", "Q11", "", "q", "query1", "-1"] {
            assert_eq!(
                bad.parse::<ExerciseId>(),
                Err(RunnerError::UnknownExercise(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for id in ExerciseId::ALL {
            assert_eq!(id.to_string().parse::<ExerciseId>().unwrap(), id);
        }
    }

    #[test]
    fn test_registry_covers_every_id_in_order() {
        let registry = Registry::new();
        assert_eq!(registry.len(), 10);
        let ids: Vec<ExerciseId> = registry.iter().map(|e| e.id).collect();
        assert_eq!(ids, ExerciseId::ALL.to_vec());
    }
}
