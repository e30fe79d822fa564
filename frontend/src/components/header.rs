use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::i18n::{use_i18n, Locale};

const SCROLL_THRESHOLD: f64 = 20.0;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("#home", "nav.home"),
    ("#services", "nav.services"),
    ("#story", "nav.ourStory"),
    ("#contact", "nav.contact"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub locale: Locale,
    pub on_locale_change: Callback<Locale>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let i18n = use_i18n();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window.clone(), scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let on_select = {
        let on_locale_change = props.on_locale_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(locale) = Locale::from_code(&select.value()) {
                on_locale_change.emit(locale);
            }
        })
    };

    let language_select = html! {
        <select class="lang-select" aria-label={i18n.t("nav.language")} onchange={on_select}>
            { for Locale::ALL.iter().map(|locale| html! {
                <option value={locale.code()} selected={*locale == props.locale}>
                    {locale.label()}
                </option>
            }) }
        </select>
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#home" class="header-logo">
                    <img src="/assets/logo.png" alt="SIVRA Logo" />
                    <div class="logo-text">
                        <span class="logo-name">{"SIVRA"}</span>
                        <span class="logo-tagline">{i18n.t("nav.tagline")}</span>
                    </div>
                </a>

                <button class="burger-menu" aria-label={i18n.t("nav.toggleMenu")} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("header-nav", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for NAV_ITEMS.iter().map(|(href, key)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                            {i18n.t(key)}
                        </a>
                    }) }
                    <a href={config::SHOP_URL} target="_blank" rel="noopener noreferrer" class="nav-cta">
                        {i18n.t("nav.getStarted")}
                    </a>
                    {language_select}
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    transition: background 0.5s ease, box-shadow 0.5s ease;
                }
                .site-header.scrolled {
                    background: rgba(250, 250, 250, 0.98);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                }
                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    color: #000;
                }
                .header-logo img {
                    width: 60px;
                    height: 60px;
                    object-fit: cover;
                }
                .logo-text {
                    display: flex;
                    flex-direction: column;
                }
                .logo-name {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .logo-tagline {
                    font-size: 10px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(0, 0, 0, 0.5);
                }
                .header-nav {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }
                .nav-link {
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    color: rgba(0, 0, 0, 0.7);
                    text-decoration: none;
                    border-radius: 0.5rem;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .nav-link:hover {
                    color: #000;
                    background: rgba(0, 0, 0, 0.05);
                }
                .nav-cta {
                    margin-left: 1rem;
                    padding: 0.6rem 1.4rem;
                    background: #000;
                    color: #fafafa;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    font-weight: 600;
                }
                .lang-select {
                    margin-left: 0.5rem;
                    padding: 0.4rem;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.5rem;
                    background: transparent;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 20px;
                    height: 2px;
                    background: #000;
                }
                @media (max-width: 1024px) {
                    .burger-menu {
                        display: flex;
                    }
                    .header-nav {
                        position: absolute;
                        top: 5rem;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #fafafa;
                        max-height: 0;
                        overflow: hidden;
                        opacity: 0;
                        transition: max-height 0.3s ease, opacity 0.3s ease;
                    }
                    .header-nav.mobile-menu-open {
                        max-height: 24rem;
                        opacity: 1;
                        padding-bottom: 1rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
