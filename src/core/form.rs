//! Pure reducer over [`FormState`]. Every user interaction becomes a
//! [`FormEvent`]; applying one yields the next snapshot without touching
//! the previous one.

use crate::domain::model::{FormEvent, FormState};

impl FormState {
    /// Applies one event and returns the resulting snapshot.
    ///
    /// Selecting a non-empty body template also replaces the body HTML
    /// with the template text; clearing the template or selecting an
    /// empty one leaves the body as the user last edited it.
    pub fn apply(&self, event: FormEvent) -> FormState {
        let mut next = self.clone();
        match event {
            FormEvent::NameSelected(value) => next.to_name = value,
            FormEvent::EmailSelected(value) => next.to_email = value,
            FormEvent::SubjectSelected(value) => next.subject = value,
            FormEvent::BodyTemplateSelected(value) => {
                if let Some(template) = value.as_deref() {
                    if !template.is_empty() {
                        next.body_html = template.to_string();
                    }
                }
                next.body_template = value;
            }
            FormEvent::BodyEdited(html) => next.body_html = html,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::model::{FormEvent, FormState};

    #[test]
    fn field_selections_update_only_their_cell() {
        let state = FormState::default()
            .apply(FormEvent::NameSelected(Some("Alice".into())))
            .apply(FormEvent::EmailSelected(Some("a@x.com".into())));

        assert_eq!(state.to_name.as_deref(), Some("Alice"));
        assert_eq!(state.to_email.as_deref(), Some("a@x.com"));
        assert_eq!(state.subject, None);
        assert_eq!(state.body_html, "");
    }

    #[test]
    fn clearing_a_selection_resets_it_to_none() {
        let state = FormState::default()
            .apply(FormEvent::SubjectSelected(Some("Leave".into())))
            .apply(FormEvent::SubjectSelected(None));

        assert_eq!(state.subject, None);
    }

    #[test]
    fn apply_does_not_mutate_the_previous_snapshot() {
        let before = FormState::default();
        let after = before.apply(FormEvent::NameSelected(Some("Alice".into())));

        assert_eq!(before.to_name, None);
        assert_eq!(after.to_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn selecting_a_template_replaces_the_body() {
        let state = FormState::default()
            .apply(FormEvent::BodyEdited("<p>draft</p>".into()))
            .apply(FormEvent::BodyTemplateSelected(Some("<p>template</p>".into())));

        assert_eq!(state.body_template.as_deref(), Some("<p>template</p>"));
        assert_eq!(state.body_html, "<p>template</p>");
    }

    #[test]
    fn clearing_the_template_keeps_the_body() {
        let state = FormState::default()
            .apply(FormEvent::BodyTemplateSelected(Some("<p>template</p>".into())))
            .apply(FormEvent::BodyTemplateSelected(None));

        assert_eq!(state.body_template, None);
        assert_eq!(state.body_html, "<p>template</p>");
    }

    #[test]
    fn empty_template_selection_keeps_the_body() {
        let state = FormState::default()
            .apply(FormEvent::BodyEdited("<p>draft</p>".into()))
            .apply(FormEvent::BodyTemplateSelected(Some(String::new())));

        assert_eq!(state.body_template.as_deref(), Some(""));
        assert_eq!(state.body_html, "<p>draft</p>");
    }

    #[test]
    fn editing_after_a_template_overrides_it() {
        let state = FormState::default()
            .apply(FormEvent::BodyTemplateSelected(Some("<p>template</p>".into())))
            .apply(FormEvent::BodyEdited("<p>edited</p>".into()));

        assert_eq!(state.body_html, "<p>edited</p>");
        assert_eq!(state.body_template.as_deref(), Some("<p>template</p>"));
    }
}
