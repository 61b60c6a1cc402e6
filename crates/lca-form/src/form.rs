//! Payload gathering and validation.
//!
//! The controller reads controls through [`FormControls`] so the same
//! validation runs against the browser DOM and against [`MemoryForm`].

use crate::config::OTHER_SENTINEL;
use crate::error::{FieldError, ValidationErrors};
use crate::fields::{FIELDS, FieldKey, FieldSpec, FieldValue};
use lca_api_types::PredictRequest;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

pub trait FormControls {
    /// Current value of the control with `id`, or `None` if the page has no such control.
    fn value(&self, id: &str) -> Option<String>;

    /// Flag or unflag a control as erroneous.
    fn set_invalid(&self, id: &str, invalid: bool);
}

/// Form state held in memory, for hosts without a DOM.
#[derive(Debug, Default)]
pub struct MemoryForm {
    values: RefCell<HashMap<String, String>>,
    invalid: RefCell<BTreeSet<String>>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, id: &str, value: &str) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&self, id: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(id.to_owned(), value.to_owned());
    }

    pub fn is_invalid(&self, id: &str) -> bool {
        self.invalid.borrow().contains(id)
    }

    pub fn invalid_ids(&self) -> Vec<String> {
        self.invalid.borrow().iter().cloned().collect()
    }
}

impl FormControls for MemoryForm {
    fn value(&self, id: &str) -> Option<String> {
        self.values.borrow().get(id).cloned()
    }

    fn set_invalid(&self, id: &str, invalid: bool) {
        let mut guard = self.invalid.borrow_mut();
        if invalid {
            guard.insert(id.to_owned());
        } else {
            guard.remove(id);
        }
    }
}

/// Transformed field values keyed by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    values: BTreeMap<FieldKey, FieldValue>,
}

impl Payload {
    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.values.get(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, key: FieldKey, value: FieldValue) {
        self.values.insert(key, value);
    }

    fn text(&self, key: FieldKey) -> Result<String, FieldError> {
        match self.values.get(&key) {
            Some(FieldValue::Text(s)) => Ok(s.clone()),
            _ => Err(FieldError::Missing {
                label: key.spec().label,
            }),
        }
    }

    fn number(&self, key: FieldKey) -> Result<f64, FieldError> {
        match self.values.get(&key) {
            Some(FieldValue::Number(n)) => Ok(*n),
            _ => Err(FieldError::Missing {
                label: key.spec().label,
            }),
        }
    }

    /// Convert a complete payload into the request body.
    pub fn into_request(self) -> Result<PredictRequest, ValidationErrors> {
        let full_time_position = self.text(FieldKey::FullTimePosition);
        let employer_state = self.text(FieldKey::EmployerState);
        let worksite_state = self.text(FieldKey::WorksiteState);
        let soc_code = self.text(FieldKey::SocCode);
        let wage_rate = self.number(FieldKey::WageRate);

        match (full_time_position, employer_state, worksite_state, soc_code, wage_rate) {
            (Ok(full_time_position), Ok(employer_state), Ok(worksite_state), Ok(soc_code), Ok(wage_rate)) => {
                Ok(PredictRequest {
                    full_time_position,
                    employer_state,
                    worksite_state,
                    soc_code,
                    wage_rate,
                })
            }
            (a, b, c, d, e) => Err(ValidationErrors(
                [a.err(), b.err(), c.err(), d.err(), e.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

/// Outcome of one validation pass. `errors` is empty iff every field produced a value.
#[derive(Debug, Clone, Default)]
pub struct Gathered {
    pub payload: Payload,
    pub errors: ValidationErrors,
}

impl Gathered {
    pub fn into_request(self) -> Result<PredictRequest, ValidationErrors> {
        if self.errors.is_empty() {
            self.payload.into_request()
        } else {
            Err(self.errors)
        }
    }
}

/// Validate every configured field, collecting all errors.
pub fn gather_payload<F: FormControls + ?Sized>(form: &F) -> Gathered {
    let mut gathered = Gathered::default();
    for spec in &FIELDS {
        match gather_field(form, spec) {
            Ok(value) => gathered.payload.insert(spec.key, value),
            Err(err) => gathered.errors.0.push(err),
        }
    }
    debug!(
        fields = gathered.payload.len(),
        errors = gathered.errors.len(),
        "form gathered"
    );
    gathered
}

fn gather_field<F: FormControls + ?Sized>(form: &F, spec: &FieldSpec) -> Result<FieldValue, FieldError> {
    form.set_invalid(spec.choice, false);
    if let Some(other) = spec.other {
        form.set_invalid(other, false);
    }

    let choice = form.value(spec.choice).unwrap_or_default();
    let other_value = spec.other.and_then(|id| form.value(id).map(|v| (id, v)));

    let (raw, flagged) = if choice == OTHER_SENTINEL {
        match other_value {
            Some((id, value)) => (value, id),
            None => (String::new(), spec.choice),
        }
    } else {
        (choice, spec.choice)
    };

    let raw = raw.trim();
    if raw.is_empty() {
        form.set_invalid(flagged, true);
        return Err(FieldError::Missing { label: spec.label });
    }

    let value = spec.transform.apply(raw);
    if spec.numeric {
        let positive = matches!(value, FieldValue::Number(n) if n.is_finite() && n > 0.0);
        if !positive {
            form.set_invalid(flagged, true);
            return Err(FieldError::NotPositive { label: spec.label });
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MemoryForm {
        MemoryForm::new()
            .with("fullTimeSelect", "Y")
            .with("employerStateSelect", "CA")
            .with("worksiteStateSelect", "NY")
            .with("socSelect", "15-1252")
            .with("wageSelect", "120000")
    }

    #[test]
    fn complete_form_yields_all_five_keys() {
        let gathered = gather_payload(&filled());
        assert!(gathered.errors.is_empty());
        assert_eq!(gathered.payload.len(), 5);
        assert_eq!(
            gathered.payload.get(FieldKey::WageRate),
            Some(&FieldValue::Number(120000.0))
        );
    }

    #[test]
    fn other_input_replaces_choice_value() {
        let form = filled()
            .with("employerStateSelect", "OTHER")
            .with("employerStateOther", "  wa ");
        let req = gather_payload(&form).into_request().unwrap();
        assert_eq!(req.employer_state, "WA");
    }

    #[test]
    fn empty_other_input_flags_the_text_input() {
        let form = filled()
            .with("socSelect", "OTHER")
            .with("socOther", "   ");
        let gathered = gather_payload(&form);
        assert_eq!(
            gathered.errors.0,
            vec![FieldError::Missing {
                label: "Occupation code (SOC)"
            }]
        );
        assert!(form.is_invalid("socOther"));
        assert!(!form.is_invalid("socSelect"));
    }

    #[test]
    fn other_chosen_without_input_flags_the_select() {
        let form = MemoryForm::new().with("fullTimeSelect", "OTHER");
        gather_payload(&form);
        assert!(form.is_invalid("fullTimeSelect"));
    }

    #[test]
    fn previous_error_marks_are_cleared() {
        let form = MemoryForm::new();
        gather_payload(&form);
        assert_eq!(form.invalid_ids().len(), 5);

        let form = {
            let f = filled();
            f.set_invalid("wageOther", true);
            f.set_invalid("socSelect", true);
            f
        };
        gather_payload(&form);
        assert!(form.invalid_ids().is_empty());
    }

    #[test]
    fn non_positive_and_unparsable_wages_are_rejected() {
        for wage in ["0", "-5", "abc", "inf", "NaN"] {
            let form = filled().with("wageSelect", wage);
            let gathered = gather_payload(&form);
            assert_eq!(
                gathered.errors.0,
                vec![FieldError::NotPositive {
                    label: "Estimated annual wage"
                }],
                "wage {wage:?}"
            );
            assert!(form.is_invalid("wageSelect"));
            assert!(gathered.payload.get(FieldKey::WageRate).is_none());
        }
    }

    #[test]
    fn hex_wage_is_accepted() {
        let form = filled().with("wageSelect", "OTHER").with("wageOther", "0x10");
        let req = gather_payload(&form).into_request().unwrap();
        assert_eq!(req.wage_rate, 16.0);
    }

    #[test]
    fn incomplete_payload_reports_missing_fields() {
        let err = Payload::default().into_request().unwrap_err();
        assert_eq!(err.len(), 5);
    }
}
