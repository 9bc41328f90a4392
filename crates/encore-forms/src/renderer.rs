// File: src/renderer.rs
// Purpose: Apply a field's validation state to the view

use crate::config::FormConfiguration;
use crate::field::FieldState;
use crate::view::FormView;
use maud::{html, Markup};

pub const VALID_CLASS: &str = "is-valid";
pub const INVALID_CLASS: &str = "is-invalid";

/// Renders pass/fail state and the error annotation for one field.
///
/// Each render replaces whatever the previous one left behind, so a field
/// never carries more than one annotation.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    show_success_indicator: bool,
}

impl Renderer {
    pub fn new(config: &FormConfiguration) -> Self {
        Self {
            show_success_indicator: config.show_success_indicator,
        }
    }

    /// Id of the annotation element for a field
    pub fn error_id(field_id: &str) -> String {
        format!("{}-error", field_id)
    }

    /// Markup of the annotation element
    pub fn error_markup(field_id: &str, message: &str) -> Markup {
        html! {
            div.error-message id=(Self::error_id(field_id)) role="alert" aria-live="polite" {
                (message)
            }
        }
    }

    pub fn render<V: FormView>(&self, view: &mut V, field_id: &str, state: &FieldState) {
        view.remove_annotation(field_id);

        if state.valid {
            view.set_class(field_id, INVALID_CLASS, false);
            view.set_class(field_id, VALID_CLASS, self.show_success_indicator);
            view.set_attribute(field_id, "aria-invalid", Some("false"));
            view.set_attribute(field_id, "aria-describedby", None);
        } else {
            let error_id = Self::error_id(field_id);
            let markup = Self::error_markup(field_id, &state.last_message);
            view.set_class(field_id, VALID_CLASS, false);
            view.set_class(field_id, INVALID_CLASS, true);
            view.set_attribute(field_id, "aria-invalid", Some("true"));
            view.set_attribute(field_id, "aria-describedby", Some(error_id.as_str()));
            view.insert_annotation(field_id, &markup.into_string());
        }
    }

    /// Remove every trace of validation from a field
    pub fn clear<V: FormView>(&self, view: &mut V, field_id: &str) {
        view.remove_annotation(field_id);
        view.set_class(field_id, VALID_CLASS, false);
        view.set_class(field_id, INVALID_CLASS, false);
        view.set_attribute(field_id, "aria-invalid", None);
        view.set_attribute(field_id, "aria-describedby", None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{FieldElement, FormDocument};
    use pretty_assertions::assert_eq;

    fn failing(message: &str) -> FieldState {
        FieldState {
            touched: true,
            evaluated: true,
            valid: false,
            last_message: message.to_string(),
        }
    }

    fn passing() -> FieldState {
        FieldState {
            touched: true,
            evaluated: true,
            ..FieldState::default()
        }
    }

    #[test]
    fn test_error_markup() {
        let markup = Renderer::error_markup("email", "Please enter a valid email address");
        assert_eq!(
            markup.into_string(),
            r#"<div class="error-message" id="email-error" role="alert" aria-live="polite">Please enter a valid email address</div>"#
        );
    }

    #[test]
    fn test_error_markup_escapes_message() {
        let markup = Renderer::error_markup("x", "<b>bad</b>").into_string();
        assert!(markup.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }

    #[test]
    fn test_render_failure() {
        let mut doc = FormDocument::new().with_field(FieldElement::new("email"));
        let renderer = Renderer::new(&FormConfiguration::default());

        renderer.render(&mut doc, "email", &failing("Nope"));

        let field = doc.field("email").unwrap();
        assert!(field.has_class(INVALID_CLASS));
        assert!(!field.has_class(VALID_CLASS));
        assert_eq!(field.attribute("aria-invalid"), Some("true"));
        assert_eq!(field.attribute("aria-describedby"), Some("email-error"));
        assert!(field.annotation().unwrap().contains("Nope"));
    }

    #[test]
    fn test_repeated_renders_replace_annotation() {
        let mut doc = FormDocument::new().with_field(FieldElement::new("email"));
        let renderer = Renderer::new(&FormConfiguration::default());

        renderer.render(&mut doc, "email", &failing("First"));
        renderer.render(&mut doc, "email", &failing("Second"));

        let field = doc.field("email").unwrap();
        assert_eq!(field.annotation_count(), 1);
        assert!(field.annotation().unwrap().contains("Second"));
    }

    #[test]
    fn test_render_success_removes_error() {
        let mut doc = FormDocument::new().with_field(FieldElement::new("email"));
        let renderer = Renderer::new(&FormConfiguration::default());

        renderer.render(&mut doc, "email", &failing("Nope"));
        renderer.render(&mut doc, "email", &passing());

        let field = doc.field("email").unwrap();
        assert_eq!(field.annotation_count(), 0);
        assert!(field.has_class(VALID_CLASS));
        assert!(!field.has_class(INVALID_CLASS));
        assert_eq!(field.attribute("aria-describedby"), None);
    }

    #[test]
    fn test_success_indicator_disabled() {
        let mut doc = FormDocument::new().with_field(FieldElement::new("email"));
        let config = FormConfiguration {
            show_success_indicator: false,
            ..FormConfiguration::default()
        };

        Renderer::new(&config).render(&mut doc, "email", &passing());

        assert!(!doc.field("email").unwrap().has_class(VALID_CLASS));
    }

    #[test]
    fn test_clear() {
        let mut doc = FormDocument::new().with_field(FieldElement::new("email"));
        let renderer = Renderer::new(&FormConfiguration::default());

        renderer.render(&mut doc, "email", &failing("Nope"));
        renderer.clear(&mut doc, "email");

        let field = doc.field("email").unwrap();
        assert!(field.classes.is_empty());
        assert_eq!(field.annotation_count(), 0);
        assert_eq!(field.attribute("aria-invalid"), None);
    }
}
