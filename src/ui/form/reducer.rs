use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;

pub struct FormReducer;

impl FormReducer {
    pub fn reduce(state: FormState, intent: FormIntent) -> FormState {
        match intent {
            FormIntent::OpenAdd => FormState::open_add(),
            FormIntent::OpenEdit { medicine } => FormState::open_edit(&medicine),
            FormIntent::Close => FormState::Hidden,
            FormIntent::Input { ch } => match state {
                FormState::Visible {
                    mode,
                    mut fields,
                    focused,
                    ..
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        field.value.push(ch);
                    }
                    FormState::Visible {
                        mode,
                        fields,
                        focused,
                        field_error: None,
                    }
                }
                hidden => hidden,
            },
            FormIntent::Backspace => match state {
                FormState::Visible {
                    mode,
                    mut fields,
                    focused,
                    field_error,
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        field.value.pop();
                    }
                    FormState::Visible {
                        mode,
                        fields,
                        focused,
                        field_error,
                    }
                }
                hidden => hidden,
            },
            FormIntent::FocusNext => match state {
                FormState::Visible {
                    mode,
                    fields,
                    focused,
                    field_error,
                } => {
                    let next = if focused + 1 >= fields.len() {
                        0
                    } else {
                        focused + 1
                    };
                    FormState::Visible {
                        mode,
                        fields,
                        focused: next,
                        field_error,
                    }
                }
                hidden => hidden,
            },
            FormIntent::FocusPrev => match state {
                FormState::Visible {
                    mode,
                    fields,
                    focused,
                    field_error,
                } => {
                    let prev = if focused == 0 {
                        fields.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    FormState::Visible {
                        mode,
                        fields,
                        focused: prev,
                        field_error,
                    }
                }
                hidden => hidden,
            },
            FormIntent::SetError { message } => match state {
                FormState::Visible {
                    mode,
                    fields,
                    focused,
                    ..
                } => FormState::Visible {
                    mode,
                    fields,
                    focused,
                    field_error: Some(message),
                },
                hidden => hidden,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::state::{FIELD_NAME, FIELD_PRICE};

    fn visible_fields(state: &FormState) -> &[crate::ui::form::state::FormField] {
        match state {
            FormState::Visible { fields, .. } => fields,
            FormState::Hidden => panic!("expected visible form"),
        }
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut state = FormState::open_add();
        for ch in "Aspirin".chars() {
            state = FormReducer::reduce(state, FormIntent::Input { ch });
        }
        assert_eq!(visible_fields(&state)[FIELD_NAME].value, "Aspirin");

        let state = FormReducer::reduce(state, FormIntent::Backspace);
        assert_eq!(visible_fields(&state)[FIELD_NAME].value, "Aspiri");
    }

    #[test]
    fn focus_wraps_around() {
        let state = FormState::open_add();
        let state = FormReducer::reduce(state, FormIntent::FocusPrev);
        match &state {
            FormState::Visible { focused, .. } => assert_eq!(*focused, 3),
            FormState::Hidden => panic!("expected visible form"),
        }

        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        match &state {
            FormState::Visible { focused, .. } => assert_eq!(*focused, 0),
            FormState::Hidden => panic!("expected visible form"),
        }
    }

    #[test]
    fn typing_clears_submit_error() {
        let state = FormState::open_add();
        let state = FormReducer::reduce(
            state,
            FormIntent::SetError {
                message: "Name is required".to_string(),
            },
        );
        match &state {
            FormState::Visible { field_error, .. } => {
                assert_eq!(field_error.as_deref(), Some("Name is required"));
            }
            FormState::Hidden => panic!("expected visible form"),
        }

        let state = FormReducer::reduce(state, FormIntent::Input { ch: 'A' });
        match &state {
            FormState::Visible { field_error, .. } => assert_eq!(*field_error, None),
            FormState::Hidden => panic!("expected visible form"),
        }
    }

    #[test]
    fn focus_change_moves_typing_target() {
        let state = FormState::open_add();
        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        let state = FormReducer::reduce(state, FormIntent::Input { ch: '9' });
        assert_eq!(visible_fields(&state)[FIELD_PRICE].value, "9");
    }

    #[test]
    fn intents_on_hidden_form_are_noops() {
        let state = FormReducer::reduce(FormState::Hidden, FormIntent::Input { ch: 'x' });
        assert_eq!(state, FormState::Hidden);
    }
}
