use yew::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod notification;
mod controllers {
    pub mod contact_form;
    pub mod navigation;
    pub mod outbound;
}
mod components {
    pub mod contact_form;
    pub mod icons;
    pub mod notification;
}
mod pages {
    pub mod content;
    pub mod landing;
}

use components::icons::whatsapp_icon;
use components::notification::Toaster;
use controllers::navigation::{DomScroller, NavAction, NavState, Section};
use controllers::outbound;
use notification::{Notification, NotificationQueue, QueueAction};
use pages::landing::Landing;


#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { menu_open, on_toggle_menu, on_navigate } = props;
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > config::HEADER_SCROLL_THRESHOLD);
                                }
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not attach header scroll listener");
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let nav_buttons = |class: &'static str| -> Html {
        Section::ALL
            .iter()
            .map(|section| {
                let on_navigate = on_navigate.clone();
                let section = *section;
                html! {
                    <button class={class} onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}>
                        {section.label()}
                    </button>
                }
            })
            .collect()
    };

    let whatsapp_button = |extra: Option<&'static str>| html! {
        <button class={classes!("btn", "btn-green", extra)} onclick={Callback::from(|_: MouseEvent| outbound::open_whatsapp())}>
            { whatsapp_icon(20) }
            {"Fale Conosco"}
        </button>
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(15, 23, 42, 0.6);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(148, 163, 184, 0.1);
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(15, 23, 42, 0.95);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .top-nav .logo { margin-bottom: 0; }
                    .logo-mark {
                        width: 40px;
                        height: 40px;
                        border-radius: 8px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #3b82f6, #1d4ed8);
                    }
                    .logo-mark.small { width: 32px; height: 32px; }
                    .nav-desktop {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                        text-align: left;
                        padding: 0;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover { color: #60a5fa; }
                    .btn-green { background: #16a34a; }
                    .btn-green:hover { background: #15803d; }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .nav-mobile {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        border-top: 1px solid #334155;
                        animation: menuIn 0.3s ease-out forwards;
                    }
                    .fit { width: fit-content; }
                    @keyframes menuIn {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-desktop { display: none; }
                        .burger-menu { display: block; }
                    }
                    @media (min-width: 769px) {
                        .nav-mobile { display: none; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="logo">
                    <span class="logo-mark">{"🔧"}</span>
                    <span class="gradient-text">{config::BRAND_NAME}</span>
                </div>

                <nav class="nav-desktop">
                    { nav_buttons("nav-link") }
                    { whatsapp_button(None) }
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu" aria-expanded={menu_open.to_string()}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <nav class="nav-mobile">
                    { nav_buttons("nav-link") }
                    { whatsapp_button(Some("fit")) }
                </nav>
            }
        </header>
    }
}


#[function_component]
fn App() -> Html {
    let nav = use_state(NavState::default);
    let toasts = use_reducer(|| NotificationQueue::new(config::TOAST_LIMIT));

    let on_toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_: ()| {
            let mut next = *nav;
            next.dispatch(NavAction::ToggleMenu, &DomScroller);
            nav.set(next);
        })
    };

    let on_navigate = {
        let nav = nav.clone();
        Callback::from(move |section: Section| {
            let mut next = *nav;
            next.dispatch(NavAction::NavigateTo(section.id().to_string()), &DomScroller);
            nav.set(next);
        })
    };

    let on_notify = {
        let toasts = toasts.clone();
        Callback::from(move |notification: Notification| {
            toasts.dispatch(QueueAction::Push(notification));
        })
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(QueueAction::Dismiss(id)))
    };

    html! {
        <>
            <Toaster toasts={toasts.toasts().to_vec()} on_dismiss={on_dismiss} />
            <Header menu_open={nav.menu_open} on_toggle_menu={on_toggle_menu} on_navigate={on_navigate.clone()} />
            <Landing on_navigate={on_navigate} on_notify={on_notify} />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
