use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::controllers::contact_form::{FormField, FormState, SubmitOutcome};
use crate::notification::Notification;

pub enum FormAction {
    /// Raw `name` attribute of the edited control and its new value.
    Input(String, String),
    Reset,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Input(name, value) => {
                let mut next = (*self).clone();
                match next.set_field_by_name(&name, value) {
                    Ok(()) => next.into(),
                    Err(_) => self,
                }
            }
            FormAction::Reset => FormState::default().into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<Notification>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(FormState::default);

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Input(input.name(), input.value()));
        })
    };

    let on_textarea_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Input(area.name(), area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut draft = (*form).clone();
            let outcome = draft.submit();
            if outcome == SubmitOutcome::Accepted {
                form.dispatch(FormAction::Reset);
            }
            on_notify.emit(outcome.notification());
        })
    };

    let text_input = |field: FormField, kind: &'static str, label: &'static str, placeholder: &'static str| {
        html! {
            <div class="form-row">
                <label for={field.as_str()}>
                    {label}
                    if field.is_required() { {" *"} }
                </label>
                <input
                    type={kind}
                    id={field.as_str()}
                    name={field.as_str()}
                    value={form.get(field).to_string()}
                    oninput={on_input.clone()}
                    placeholder={placeholder}
                />
            </div>
        }
    };

    html! {
        // Native validation is off so every attempt goes through FormState::submit
        <form class="contact-form glass-effect" onsubmit={onsubmit} novalidate={true}>
            { text_input(FormField::Name, "text", "Nome", "Seu nome completo") }
            { text_input(FormField::Email, "email", "E-mail", "seu@email.com") }
            { text_input(FormField::Phone, "tel", "Telefone", config::CONTACT_PHONE) }
            <div class="form-row">
                <label for={FormField::Message.as_str()}>{"Mensagem *"}</label>
                <textarea
                    id={FormField::Message.as_str()}
                    name={FormField::Message.as_str()}
                    rows="4"
                    value={form.message.clone()}
                    oninput={on_textarea_input}
                    placeholder="Descreva o tipo de serviço que precisa ou sua dúvida..."
                />
            </div>
            <button type="submit" class="btn btn-primary btn-lg btn-block">
                {"Enviar Mensagem"}
                <span class="arrow">{"→"}</span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_action_updates_named_field() {
        let state = Rc::new(FormState::default());
        let state = state.reduce(FormAction::Input("email".into(), "ana@ex.com".into()));
        assert_eq!(state.email, "ana@ex.com");
        assert_eq!(state.name, "");
    }

    #[test]
    fn input_for_unknown_control_keeps_same_state() {
        let state = Rc::new(FormState {
            name: "Ana".into(),
            ..FormState::default()
        });
        let next = state.clone().reduce(FormAction::Input("subject".into(), "x".into()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reset_action_clears_everything() {
        let state = Rc::new(FormState {
            name: "Ana".into(),
            email: "ana@ex.com".into(),
            phone: "1".into(),
            message: "oi".into(),
        });
        assert_eq!(*state.reduce(FormAction::Reset), FormState::default());
    }
}
