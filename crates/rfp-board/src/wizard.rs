//! Multi-Step Form Wizard
//!
//! A linear chain of steps. Moving forward validates only the fields of the
//! current step; moving back is always allowed. Validation itself is
//! delegated to a `FormValidator`.

use std::collections::BTreeMap;

use thiserror::Error;

/// One page of the wizard and the fields it owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<F: 'static> {
    pub id: &'static str,
    pub name: &'static str,
    pub fields: &'static [F],
}

/// Result of validating a set of fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation<F: Ord> {
    pub errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for Validation<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord> Validation<F> {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Pluggable validation capability
pub trait FormValidator {
    type Field: Copy + Ord + 'static;
    type Data;

    /// Validate only `fields` of `data`
    fn validate(&self, data: &Self::Data, fields: &[Self::Field]) -> Validation<Self::Field>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError<F: std::fmt::Debug> {
    #[error("submit is only available from the last step")]
    NotAtLastStep,
    #[error("form has invalid fields: {0:?}")]
    Invalid(Vec<F>),
}

/// Wizard position plus the field errors currently on display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard<F: Copy + Ord + 'static> {
    steps: &'static [Step<F>],
    current: usize,
    errors: BTreeMap<F, String>,
}

impl<F: Copy + Ord + std::fmt::Debug + 'static> Wizard<F> {
    /// `steps` must not be empty
    pub fn new(steps: &'static [Step<F>]) -> Self {
        debug_assert!(!steps.is_empty(), "wizard needs at least one step");
        Self {
            steps,
            current: 0,
            errors: BTreeMap::new(),
        }
    }

    pub fn steps(&self) -> &'static [Step<F>] {
        self.steps
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> &Step<F> {
        &self.steps[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    pub fn errors(&self) -> &BTreeMap<F, String> {
        &self.errors
    }

    pub fn error_for(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Validate the current step and advance on success.
    ///
    /// Returns whether the step validated. Errors for the step's fields are
    /// replaced with the fresh result; other steps' errors are kept.
    pub fn next<V>(&mut self, validator: &V, data: &V::Data) -> bool
    where
        V: FormValidator<Field = F>,
    {
        let fields = self.step().fields;
        let outcome = validator.validate(data, fields);
        for field in fields {
            self.errors.remove(field);
        }
        let valid = outcome.is_valid();
        self.errors.extend(outcome.errors);

        if !valid {
            log::debug!("[WIZARD] step {} blocked by invalid fields", self.current);
            return false;
        }
        if !self.is_last() {
            self.current += 1;
            log::debug!("[WIZARD] advanced to step {}", self.current);
        }
        true
    }

    /// Step back without validating
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Validate every step and hand the data to `sink` once.
    pub fn submit<V, S>(&mut self, validator: &V, data: &V::Data, sink: S) -> Result<(), WizardError<F>>
    where
        V: FormValidator<Field = F>,
        S: FnOnce(&V::Data),
    {
        if !self.is_last() {
            return Err(WizardError::NotAtLastStep);
        }
        let all_fields: Vec<F> = self.steps.iter().flat_map(|s| s.fields.iter().copied()).collect();
        let outcome = validator.validate(data, &all_fields);
        if !outcome.is_valid() {
            let invalid: Vec<F> = outcome.errors.keys().copied().collect();
            self.errors = outcome.errors;
            return Err(WizardError::Invalid(invalid));
        }
        self.errors.clear();
        sink(data);
        Ok(())
    }

    /// Back to the first step with no errors shown
    pub fn reset(&mut self) {
        self.current = 0;
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        A,
        B,
        C,
    }

    static STEPS: [Step<Field>; 3] = [
        Step { id: "one", name: "One", fields: &[Field::A] },
        Step { id: "two", name: "Two", fields: &[Field::B] },
        Step { id: "three", name: "Three", fields: &[Field::C] },
    ];

    /// Field is valid when its slot is non-empty
    struct NonEmpty;

    impl FormValidator for NonEmpty {
        type Field = Field;
        type Data = [&'static str; 3];

        fn validate(&self, data: &Self::Data, fields: &[Field]) -> Validation<Field> {
            let mut v = Validation::default();
            for f in fields {
                if data[*f as usize].is_empty() {
                    v.errors.insert(*f, "required".to_string());
                }
            }
            v
        }
    }

    #[test]
    fn test_next_blocks_on_invalid_step() {
        let mut wizard = Wizard::new(&STEPS);
        assert!(!wizard.next(&NonEmpty, &["", "", ""]));
        assert_eq!(wizard.current(), 0);
        assert_eq!(wizard.error_for(Field::A), Some("required"));
    }

    #[test]
    fn test_next_only_checks_current_step() {
        let mut wizard = Wizard::new(&STEPS);
        assert!(wizard.next(&NonEmpty, &["a", "", ""]));
        assert_eq!(wizard.current(), 1);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_error_cleared_after_fix() {
        let mut wizard = Wizard::new(&STEPS);
        wizard.next(&NonEmpty, &["", "", ""]);
        assert!(wizard.next(&NonEmpty, &["a", "", ""]));
        assert_eq!(wizard.error_for(Field::A), None);
    }

    #[test]
    fn test_does_not_advance_past_last() {
        let mut wizard = Wizard::new(&STEPS);
        let data = ["a", "b", "c"];
        wizard.next(&NonEmpty, &data);
        wizard.next(&NonEmpty, &data);
        assert!(wizard.is_last());
        assert!(wizard.next(&NonEmpty, &data));
        assert_eq!(wizard.current(), 2);
    }

    #[test]
    fn test_previous_is_ungated_and_bounded() {
        let mut wizard = Wizard::new(&STEPS);
        wizard.previous();
        assert_eq!(wizard.current(), 0);

        wizard.next(&NonEmpty, &["a", "", ""]);
        wizard.previous();
        assert!(wizard.is_first());
    }

    #[test]
    fn test_submit_requires_last_step() {
        let mut wizard = Wizard::new(&STEPS);
        let mut calls = 0;
        let result = wizard.submit(&NonEmpty, &["a", "b", "c"], |_| calls += 1);
        assert_eq!(result, Err(WizardError::NotAtLastStep));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_submit_validates_every_step() {
        let mut wizard = Wizard::new(&STEPS);
        wizard.next(&NonEmpty, &["a", "b", ""]);
        wizard.next(&NonEmpty, &["a", "b", ""]);
        assert!(wizard.is_last());

        // Field A was cleared after the first step passed
        let mut calls = 0;
        let result = wizard.submit(&NonEmpty, &["", "b", "c"], |_| calls += 1);
        assert_eq!(result, Err(WizardError::Invalid(vec![Field::A])));
        assert_eq!(calls, 0);
        assert_eq!(wizard.error_for(Field::A), Some("required"));

        let mut submitted = None;
        let result = wizard.submit(&NonEmpty, &["a", "b", "c"], |d| submitted = Some(*d));
        assert!(result.is_ok());
        assert_eq!(submitted, Some(["a", "b", "c"]));
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut wizard = Wizard::new(&STEPS);
        wizard.next(&NonEmpty, &["a", "", ""]);
        wizard.next(&NonEmpty, &["a", "", ""]);
        wizard.reset();
        assert_eq!(wizard.current(), 0);
        assert!(wizard.errors().is_empty());
    }
}
