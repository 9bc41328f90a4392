// File: src/view.rs
// Purpose: The DOM seam the binder and renderer talk to, plus an in-memory document

use encore_validation_core::FieldLookup;
use std::collections::{BTreeMap, BTreeSet};

/// Attribute carrying a field's rule declaration
pub const RULES_ATTRIBUTE: &str = "data-validate";

/// A field as declared in markup: its id, submission name and rule declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub id: String,
    pub name: String,
    pub rules: String,
}

/// Operations the binder needs from the rendered form.
///
/// A browser implementation maps these onto the form's DOM subtree;
/// `FormDocument` keeps them in memory. Field values are read through
/// `FieldLookup`, which is also what `match` rules resolve against.
pub trait FormView: FieldLookup {
    /// Fields carrying a rule declaration, in document order
    fn declared_fields(&self) -> Vec<FieldDeclaration>;

    fn set_value(&mut self, field_id: &str, value: &str);

    fn set_class(&mut self, field_id: &str, class: &str, enabled: bool);

    /// Set an attribute, or remove it when `value` is None
    fn set_attribute(&mut self, field_id: &str, name: &str, value: Option<&str>);

    /// Remove the error annotation attached to a field, if any
    fn remove_annotation(&mut self, field_id: &str);

    /// Attach an error annotation element after the field
    fn insert_annotation(&mut self, field_id: &str, markup: &str);

    fn focus(&mut self, field_id: &str);
}

/// An input element held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldElement {
    pub id: String,
    pub name: String,
    pub value: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    annotations: Vec<String>,
}

impl FieldElement {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rules(mut self, declaration: impl Into<String>) -> Self {
        self.attributes
            .insert(RULES_ATTRIBUTE.to_string(), declaration.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The attached error annotation markup
    pub fn annotation(&self) -> Option<&str> {
        self.annotations.last().map(String::as_str)
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }
}

/// In-memory form used for server-side rendering and tests
#[derive(Debug, Clone, Default)]
pub struct FormDocument {
    fields: Vec<FieldElement>,
    focused: Option<String>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FieldElement) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldElement> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn field_mut(&mut self, field_id: &str) -> Option<&mut FieldElement> {
        self.fields.iter_mut().find(|f| f.id == field_id)
    }

    pub fn fields(&self) -> &[FieldElement] {
        &self.fields
    }

    /// Id of the field that last received focus
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}

impl FieldLookup for FormDocument {
    fn field_value(&self, field_id: &str) -> Option<&str> {
        self.field(field_id).map(|f| f.value.as_str())
    }
}

impl FormView for FormDocument {
    fn declared_fields(&self) -> Vec<FieldDeclaration> {
        self.fields
            .iter()
            .filter_map(|f| {
                f.attribute(RULES_ATTRIBUTE).map(|rules| FieldDeclaration {
                    id: f.id.clone(),
                    name: f.name.clone(),
                    rules: rules.to_string(),
                })
            })
            .collect()
    }

    fn set_value(&mut self, field_id: &str, value: &str) {
        if let Some(field) = self.field_mut(field_id) {
            field.value = value.to_string();
        }
    }

    fn set_class(&mut self, field_id: &str, class: &str, enabled: bool) {
        if let Some(field) = self.field_mut(field_id) {
            if enabled {
                field.classes.insert(class.to_string());
            } else {
                field.classes.remove(class);
            }
        }
    }

    fn set_attribute(&mut self, field_id: &str, name: &str, value: Option<&str>) {
        if let Some(field) = self.field_mut(field_id) {
            match value {
                Some(value) => {
                    field.attributes.insert(name.to_string(), value.to_string());
                }
                None => {
                    field.attributes.remove(name);
                }
            }
        }
    }

    fn remove_annotation(&mut self, field_id: &str) {
        if let Some(field) = self.field_mut(field_id) {
            field.annotations.clear();
        }
    }

    fn insert_annotation(&mut self, field_id: &str, markup: &str) {
        if let Some(field) = self.field_mut(field_id) {
            field.annotations.push(markup.to_string());
        }
    }

    fn focus(&mut self, field_id: &str) {
        if self.field(field_id).is_some() {
            self.focused = Some(field_id.to_string());
        }
    }
}
