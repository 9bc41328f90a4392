// File: src/binder.rs
// Purpose: Bind fields to rule chains and drive validation from form events

use crate::config::FormConfiguration;
use crate::error::FormError;
use crate::field::{FieldBinding, FieldState};
use crate::renderer::Renderer;
use crate::view::FormView;
use encore_validation_core::{evaluate_chain, RuleChain, ValidationResult};
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// A submitted value: single, or a list when several fields share a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    fn push(&mut self, value: String) {
        match self {
            FieldValue::Single(first) => {
                *self = FieldValue::Multiple(vec![std::mem::take(first), value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            FieldValue::Single(value) => Some(value),
            FieldValue::Multiple(_) => None,
        }
    }
}

/// Values of every bound field, keyed by submission name.
///
/// Serializes to a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.0.entry(name.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(FieldValue::Single(value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; carries the collected values
    Valid(FormValues),
    /// Submission blocked; `focus` is the first invalid field in binding order
    Blocked { invalid: Vec<String>, focus: String },
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid(_))
    }

    pub fn values(self) -> Option<FormValues> {
        match self {
            SubmitOutcome::Valid(values) => Some(values),
            SubmitOutcome::Blocked { .. } => None,
        }
    }
}

/// Owns a form's field bindings and their validation state
#[derive(Debug, Clone)]
pub struct FormBinder {
    config: FormConfiguration,
    renderer: Renderer,
    bindings: Vec<FieldBinding>,
    states: HashMap<String, FieldState>,
}

impl FormBinder {
    pub fn new(config: FormConfiguration) -> Self {
        Self {
            renderer: Renderer::new(&config),
            config,
            bindings: Vec::new(),
            states: HashMap::new(),
        }
    }

    /// Bind every field the view declares rules for, in document order
    pub fn from_view<V: FormView>(view: &V, config: FormConfiguration) -> Result<Self, FormError> {
        let mut binder = Self::new(config);
        for declaration in view.declared_fields() {
            binder.bind(FieldBinding::new(
                declaration.id,
                declaration.name,
                RuleChain::parse(&declaration.rules),
            ))?;
        }
        tracing::debug!(fields = binder.bindings.len(), "form bound");
        Ok(binder)
    }

    /// Add a field binding. Rule declaration problems are logged, not rejected.
    pub fn bind(&mut self, binding: FieldBinding) -> Result<(), FormError> {
        if self.states.contains_key(&binding.id) {
            return Err(FormError::DuplicateField(binding.id));
        }

        for problem in binding.rules.lint() {
            tracing::warn!(field = %binding.id, %problem, "rule declaration problem");
        }

        self.states.insert(binding.id.clone(), FieldState::default());
        self.bindings.push(binding);
        Ok(())
    }

    pub fn config(&self) -> &FormConfiguration {
        &self.config
    }

    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }

    pub fn state(&self, field_id: &str) -> Option<&FieldState> {
        self.states.get(field_id)
    }

    /// Whether every field has been evaluated and its last evaluation passed.
    ///
    /// A field that has not been blurred, validated or submitted yet counts
    /// as not valid, even if its current value would pass.
    pub fn is_valid(&self) -> bool {
        self.states.values().all(|s| s.evaluated && s.valid)
    }

    /// Field lost focus: mark it touched and validate if configured to
    pub fn on_blur<V: FormView>(
        &mut self,
        view: &mut V,
        field_id: &str,
    ) -> Result<Option<ValidationResult>, FormError> {
        let state = self
            .states
            .get_mut(field_id)
            .ok_or_else(|| FormError::UnknownField(field_id.to_string()))?;
        state.touched = true;

        if !self.config.validate_on_blur {
            return Ok(None);
        }
        self.validate_field(view, field_id).map(Some)
    }

    /// Field value changed: validate if live validation is on
    pub fn on_input<V: FormView>(
        &mut self,
        view: &mut V,
        field_id: &str,
    ) -> Result<Option<ValidationResult>, FormError> {
        if !self.states.contains_key(field_id) {
            return Err(FormError::UnknownField(field_id.to_string()));
        }

        if !self.config.validate_on_input {
            return Ok(None);
        }
        self.validate_field(view, field_id).map(Some)
    }

    /// Evaluate one field's chain against its live value and render the outcome
    pub fn validate_field<V: FormView>(
        &mut self,
        view: &mut V,
        field_id: &str,
    ) -> Result<ValidationResult, FormError> {
        let result = self.evaluate(view, field_id)?;
        self.record(view, field_id, &result, false);
        Ok(result)
    }

    /// Validate every bound field, then decide.
    ///
    /// No field is skipped because an earlier one failed; every field gets
    /// its state and rendering updated before the outcome is returned.
    pub fn submit<V: FormView>(&mut self, view: &mut V) -> SubmitOutcome {
        let ids: Vec<String> = self.bindings.iter().map(|b| b.id.clone()).collect();
        let mut invalid = Vec::new();

        for id in &ids {
            let result = match self.evaluate(view, id) {
                Ok(result) => result,
                Err(_) => continue,
            };
            if !result.valid {
                invalid.push(id.clone());
            }
            self.record(view, id, &result, true);
        }

        let Some(focus) = invalid.first().cloned() else {
            let values = self.collect_values(view);
            tracing::info!(fields = values.len(), "form valid");
            return SubmitOutcome::Valid(values);
        };

        if !self.config.preserve_data_on_error {
            for id in &invalid {
                view.set_value(id, "");
            }
        }

        view.focus(&focus);
        tracing::debug!(invalid = invalid.len(), focus = %focus, "submission blocked");
        SubmitOutcome::Blocked { invalid, focus }
    }

    /// Clear values and rendering, and forget that fields were touched
    pub fn reset<V: FormView>(&mut self, view: &mut V) {
        for binding in &self.bindings {
            view.set_value(&binding.id, "");
            self.renderer.clear(view, &binding.id);
        }
        for state in self.states.values_mut() {
            *state = FieldState::default();
        }
    }

    fn evaluate<V: FormView>(&self, view: &V, field_id: &str) -> Result<ValidationResult, FormError> {
        let binding = self
            .bindings
            .iter()
            .find(|b| b.id == field_id)
            .ok_or_else(|| FormError::UnknownField(field_id.to_string()))?;

        let value = view.field_value(&binding.id).unwrap_or_default().trim();
        let result = evaluate_chain(value, &binding.rules, view);
        tracing::debug!(field = field_id, valid = result.valid, "field evaluated");
        Ok(result)
    }

    fn record<V: FormView>(&mut self, view: &mut V, field_id: &str, result: &ValidationResult, touch: bool) {
        let touched = touch || self.states.get(field_id).map(|s| s.touched).unwrap_or(false);
        let state = FieldState::from_result(touched, result);
        self.renderer.render(view, field_id, &state);
        self.states.insert(field_id.to_string(), state);
    }

    fn collect_values<V: FormView>(&self, view: &V) -> FormValues {
        let mut values = FormValues::default();
        for binding in &self.bindings {
            let value = view.field_value(&binding.id).unwrap_or_default().trim();
            values.insert(binding.name.as_str(), value);
        }
        values
    }
}
