use yew::prelude::*;

use crate::config;
use crate::i18n::use_i18n;

/// Card ids under `services.*` with their header images.
const SERVICES: [(&str, &str); 4] = [
    ("brandStrategy", "/assets/serv1.jpeg"),
    ("digitalMarketing", "/assets/serv2.jpeg"),
    ("digitalProducts", "/assets/serv3.jpeg"),
    ("techSolutions", "/assets/serv4.jpeg"),
];

const FEATURES_PER_SERVICE: usize = 4;

/// Clicking the active card closes it; any other card becomes the active one.
pub fn toggle_active(active: Option<usize>, clicked: usize) -> Option<usize> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let i18n = use_i18n();
    let active = use_state(|| None::<usize>);

    let cards = SERVICES.iter().enumerate().map(|(index, (id, image))| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(toggle_active(*active, index)))
        };
        let title = i18n.t(&format!("services.{}.title", id));

        html! {
            <div key={index} class={classes!("service-card", (*active == Some(index)).then(|| "active"))} {onclick}>
                <div class="service-image">
                    <img src={*image} alt={title.clone()} />
                    <div class="service-shade"></div>
                    <span class="service-badge">{i18n.t(&format!("services.{}.badge", id))}</span>
                </div>
                <div class="service-body">
                    <h3>{title}</h3>
                    <p>{i18n.t(&format!("services.{}.description", id))}</p>
                    <ul>
                        { for (1..=FEATURES_PER_SERVICE).map(|n| html! {
                            <li>{i18n.t(&format!("services.{}.feature{}", id, n))}</li>
                        }) }
                    </ul>
                    <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="service-link">
                        {i18n.t("services.learnMore")}
                    </a>
                </div>
            </div>
        }
    });

    html! {
        <section id="services" class="services">
            <div class="section-header">
                <span class="eyebrow">{i18n.t("services.badge")}</span>
                <h2>{i18n.t("services.ourOffering")}</h2>
                <p>{i18n.t("services.offeringDesc")}</p>
            </div>
            <div class="service-grid">{ for cards }</div>
            <div class="services-cta">
                <h3>{i18n.t("services.workWithUs")}</h3>
                <a href={config::WHATSAPP_URL} class="cta-light">{i18n.t("services.bookConsultation")}</a>
            </div>
            <style>
                {r#"
                .services {
                    padding: 6rem 1rem;
                    background: #fff;
                }
                .eyebrow {
                    font-size: 0.75rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #9ca3af;
                }
                .service-grid {
                    max-width: 87.5rem;
                    margin: 0 auto 5rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    background: #fff;
                    border-radius: 2rem;
                    overflow: hidden;
                    border: 1px solid #f3f4f6;
                    cursor: pointer;
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }
                .service-card:hover {
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                .service-card.active {
                    transform: scale(1.02);
                }
                .service-image {
                    position: relative;
                    height: 14rem;
                    background: #000;
                    overflow: hidden;
                }
                .service-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .service-card:hover .service-image img {
                    transform: scale(1.1);
                }
                .service-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.3));
                }
                .service-badge {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.2);
                    color: #fff;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .service-body {
                    padding: 2rem;
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                }
                .service-body p {
                    flex: 1;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .service-link, .cta-light {
                    display: block;
                    padding: 1rem;
                    text-align: center;
                    border-radius: 0.75rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .service-link {
                    background: #000;
                    color: #fff;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .services-cta {
                    max-width: 87.5rem;
                    margin: 0 auto;
                    background: #000;
                    border-radius: 3rem;
                    padding: 5rem 3rem;
                    text-align: center;
                    color: #fff;
                }
                .cta-light {
                    display: inline-block;
                    padding: 1.25rem 2.5rem;
                    background: #fff;
                    color: #000;
                    border-radius: 1rem;
                }
                @media (max-width: 1024px) {
                    .service-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .service-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_card_open_at_a_time() {
        let active = toggle_active(None, 2);
        assert_eq!(active, Some(2));
        let active = toggle_active(active, 0);
        assert_eq!(active, Some(0));
        assert_eq!(toggle_active(active, 0), None);
    }
}
