use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::notification::{Severity, Toast};

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" aria-live="polite">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        top: 1rem;
                        right: 1rem;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 420px;
                        width: calc(100% - 2rem);
                    }
                    .toast {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(30, 41, 59, 0.95);
                        border: 1px solid rgba(148, 163, 184, 0.2);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        animation: toastIn 0.3s ease-out forwards;
                    }
                    .toast.error {
                        background: rgba(153, 27, 27, 0.95);
                        border-color: rgba(248, 113, 113, 0.4);
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-body {
                        font-size: 0.9rem;
                        opacity: 0.9;
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        font-size: 1rem;
                        opacity: 0.7;
                    }
                    .toast-close:hover { opacity: 1; }
                    @keyframes toastIn {
                        from { transform: translateY(-100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-dismiss; dropping the Timeout on unmount cancels it
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || {
                    on_dismiss.emit(id);
                });
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let notification = &props.toast.notification;
    let (class, role) = match notification.severity {
        Severity::Info => ("toast", "status"),
        Severity::Error => ("toast error", "alert"),
    };

    html! {
        <div class={class} role={role}>
            <div>
                <div class="toast-title">{&notification.title}</div>
                <div class="toast-body">{&notification.body}</div>
            </div>
            <button class="toast-close" onclick={close} aria-label="Fechar">{"✕"}</button>
        </div>
    }
}
