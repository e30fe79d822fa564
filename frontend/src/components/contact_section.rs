use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form::{submit, ContactForm, Field, FormAction, SubmitStatus};
use crate::contact::transport::FormspreeTransport;
use crate::i18n::use_i18n;

struct ContactMethod {
    icon: &'static str,
    title_key: &'static str,
    description_key: &'static str,
    link: &'static str,
    value: &'static str,
}

const CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        icon: "✉",
        title_key: "contact.email",
        description_key: "contact.emailDesc",
        link: "mailto:sivra.product@gmail.com",
        value: config::CONTACT_EMAIL,
    },
    ContactMethod {
        icon: "☏",
        title_key: "contact.whatsapp",
        description_key: "contact.whatsappDesc",
        link: "https://wa.me/+905360330996",
        value: "+90 (536) 033 09 96",
    },
    ContactMethod {
        icon: "◎",
        title_key: "contact.instagram",
        description_key: "contact.instagramDesc",
        link: "https://www.instagram.com/sivra.studio/",
        value: "sivra.studio",
    },
    ContactMethod {
        icon: "in",
        title_key: "contact.linkedin",
        description_key: "contact.linkedinDesc",
        link: "http://linkedin.com/in/anoosha-moshkelgosha-568239261",
        value: "SIVRA Studio",
    },
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let i18n = use_i18n();
    let form = use_reducer(ContactForm::default);

    // Success banner goes away on its own; leaving the page or a new status cancels the timer.
    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |status| {
                let timeout = (*status == SubmitStatus::Success).then(|| {
                    Timeout::new(config::SUCCESS_DISPLAY_MS, move || {
                        dispatcher.dispatch(FormAction::ExpireSuccess)
                    })
                });
                move || drop(timeout)
            },
            form.status,
        );
    }

    let on_field = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                Field::Name | Field::Email => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            dispatcher.dispatch(FormAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.status == SubmitStatus::Loading {
                return;
            }
            let fields = form.fields.clone();
            let dispatcher = form.dispatcher();
            spawn_local(async move {
                let transport = FormspreeTransport::new(config::formspree_endpoint());
                let result = submit(&fields, &transport, |action| dispatcher.dispatch(action)).await;
                if result.is_ok() {
                    log::info!("Contact form submitted");
                }
            });
        })
    };

    let loading = form.status == SubmitStatus::Loading;

    let banner = match form.status {
        SubmitStatus::Success => html! {
            <div class="form-banner success">{i18n.t("contact.successMessage")}</div>
        },
        SubmitStatus::Error => html! {
            <div class="form-banner error">{i18n.t("contact.errorMessage")}</div>
        },
        SubmitStatus::Idle | SubmitStatus::Loading => html! {},
    };

    html! {
        <section id="contact" class="contact">
            <div class="section-header">
                <div class="badge">
                    <span class="badge-dot"></span>
                    <span>{i18n.t("contact.badge")}</span>
                </div>
                <h2>{i18n.t("contact.title")}</h2>
                <p>{i18n.t("contact.connectDesc")}</p>
            </div>

            <div class="contact-grid">
                <div class="contact-methods">
                    <h3>{i18n.t("contact.getInTouch")}</h3>
                    { for CONTACT_METHODS.iter().map(|method| html! {
                        <a href={method.link} target="_blank" rel="noopener noreferrer" class="contact-method">
                            <span class="method-icon">{method.icon}</span>
                            <div>
                                <h4>{i18n.t(method.title_key)}</h4>
                                <p>{i18n.t(method.description_key)}</p>
                                <span class="method-value">{method.value}</span>
                            </div>
                        </a>
                    }) }
                </div>

                <div class="contact-form">
                    <h3>{i18n.t("contact.sendMessage")}</h3>
                    {banner}
                    <form {onsubmit}>
                        <label for="contact-name">{i18n.t("contact.name")}</label>
                        <input
                            id="contact-name"
                            type="text"
                            name="name"
                            value={form.fields.name.clone()}
                            oninput={on_field(Field::Name)}
                            placeholder={i18n.t("contact.namePlaceholder")}
                            required=true
                            disabled={loading}
                        />
                        <label for="contact-email">{i18n.t("contact.emailLabel")}</label>
                        <input
                            id="contact-email"
                            type="email"
                            name="email"
                            value={form.fields.email.clone()}
                            oninput={on_field(Field::Email)}
                            placeholder={i18n.t("contact.emailPlaceholder")}
                            required=true
                            disabled={loading}
                        />
                        <label for="contact-message">{i18n.t("contact.message")}</label>
                        <textarea
                            id="contact-message"
                            name="message"
                            rows="5"
                            value={form.fields.message.clone()}
                            oninput={on_field(Field::Message)}
                            placeholder={i18n.t("contact.messagePlaceholder")}
                            required=true
                            disabled={loading}
                        />
                        <button type="submit" class="form-submit" disabled={loading}>
                            {
                                if loading {
                                    i18n.t("contact.sending")
                                } else {
                                    i18n.t("contact.sendButton")
                                }
                            }
                        </button>
                    </form>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    padding: 6rem 1.5rem;
                    background: #fafafa;
                }
                .contact-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .contact-method {
                    display: flex;
                    gap: 1.5rem;
                    padding: 1.5rem;
                    margin-bottom: 1rem;
                    background: #fff;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 1rem;
                    color: #000;
                    text-decoration: none;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .contact-method:hover {
                    transform: translateX(4px);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .method-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    flex-shrink: 0;
                    border-radius: 0.75rem;
                    background: #000;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }
                .method-value {
                    font-weight: 600;
                }
                .contact-form {
                    background: #fff;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                }
                .contact-form form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .contact-form input, .contact-form textarea {
                    padding: 0.9rem 1rem;
                    margin-bottom: 1rem;
                    border: 2px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.75rem;
                    font: inherit;
                    transition: border-color 0.3s ease;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: none;
                    border-color: #000;
                }
                .form-banner {
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 0.75rem;
                }
                .form-banner.success {
                    background: #ecfdf5;
                    color: #065f46;
                }
                .form-banner.error {
                    background: #fef2f2;
                    color: #991b1b;
                }
                .form-submit {
                    padding: 1rem 2rem;
                    background: #000;
                    color: #fff;
                    border: none;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .form-submit:hover:not(:disabled) {
                    transform: scale(1.02);
                }
                .form-submit:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
