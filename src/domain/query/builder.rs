use super::predicate::Predicate;

/// Accumulates predicates into a single conjunction
///
/// Starts empty; an empty builder builds the match-all predicate.
///
/// # Example
/// ```
/// use roster_api::domain::query::{BooleanBuilder, Field};
///
/// let mut builder = BooleanBuilder::new();
/// builder.and(Field::Age.goe(35)).and(Field::Age.loe(45));
///
/// assert!(builder.has_value());
/// assert_eq!(builder.build().to_string(), "m.age >= 35 AND m.age <= 45");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BooleanBuilder {
    conjuncts: Vec<Predicate>,
}

impl BooleanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `predicate` to the conjunction
    pub fn and(&mut self, predicate: Predicate) -> &mut Self {
        self.conjuncts.push(predicate);
        self
    }

    /// Adds `predicate` when present; `None` leaves the builder untouched
    pub fn and_opt(&mut self, predicate: Option<Predicate>) -> &mut Self {
        if let Some(predicate) = predicate {
            self.conjuncts.push(predicate);
        }
        self
    }

    /// Returns true once at least one predicate has been added
    pub fn has_value(&self) -> bool {
        !self.conjuncts.is_empty()
    }

    pub fn build(self) -> Predicate {
        Predicate::all(self.conjuncts)
    }
}
