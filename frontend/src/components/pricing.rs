use serde::Deserialize;
use yew::prelude::*;

use crate::config;
use crate::i18n::use_i18n;

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub setup_price: String,
    pub monthly_price: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

/// WhatsApp deep link with a prefilled "interested in" message.
pub fn whatsapp_link(intro: &str, tier_name: &str) -> String {
    let text = format!("{} {}", intro, tier_name);
    format!("{}?text={}", config::WHATSAPP_URL, urlencoding::encode(&text))
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let i18n = use_i18n();
    let tiers: Vec<PricingTier> = i18n.objects("pricing.tiers");
    let intro = i18n.t("pricing.interestedIn");

    html! {
        <section id="pricing" class="pricing">
            <div class="section-header">
                <span class="pricing-badge">{i18n.t("pricing.badge")}</span>
                <h2>{i18n.t("pricing.title")}</h2>
                <p>{i18n.t("pricing.subtitle")}</p>
                <p class="pricing-note">{i18n.t("pricing.description")}</p>
            </div>
            <div class="pricing-grid">
                { for tiers.iter().map(|tier| html! {
                    <div key={tier.id.clone()} class={classes!("tier", tier.highlighted.then(|| "highlighted"))}>
                        {
                            if tier.highlighted {
                                html! { <span class="tier-popular">{i18n.t("pricing.popular")}</span> }
                            } else {
                                html! {}
                            }
                        }
                        <h3>{&tier.name}</h3>
                        <p class="tier-tagline">{&tier.tagline}</p>
                        <div class="tier-prices">
                            <div><strong>{&tier.setup_price}</strong>{" "}{i18n.t("pricing.setupLabel")}</div>
                            <div><strong>{&tier.monthly_price}</strong>{" "}{i18n.t("pricing.monthlyLabel")}</div>
                        </div>
                        <p>{&tier.description}</p>
                        <ul>
                            { for tier.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                        </ul>
                        <a href={whatsapp_link(&intro, &tier.name)} target="_blank" rel="noopener noreferrer" class="tier-cta">
                            {i18n.t("pricing.cta")}
                        </a>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .pricing {
                    padding: 6rem 1rem;
                    background: #fafafa;
                }
                .pricing-badge {
                    padding: 0.75rem 2rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #fff;
                    background: linear-gradient(to right, #374151, #111827);
                    border-radius: 9999px;
                }
                .pricing-note {
                    font-size: 1rem;
                    color: rgba(0, 0, 0, 0.6);
                }
                .pricing-grid {
                    max-width: 100rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    align-items: stretch;
                }
                .tier {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2.5rem;
                    background: #fff;
                    border-radius: 2rem;
                    border: 1px solid #e5e7eb;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .tier:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                }
                .tier.highlighted {
                    border: 2px solid #000;
                    transform: scale(1.03);
                }
                .tier-popular {
                    position: absolute;
                    top: -0.9rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.25rem 1rem;
                    background: #000;
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    border-radius: 9999px;
                }
                .tier-tagline {
                    color: #6b7280;
                }
                .tier-prices strong {
                    font-size: 1.75rem;
                }
                .tier ul {
                    flex: 1;
                    padding-left: 1.25rem;
                }
                .tier-cta {
                    display: block;
                    padding: 1rem;
                    text-align: center;
                    border-radius: 0.75rem;
                    background: #000;
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .pricing-grid {
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
    fn tier_reads_camel_case_and_defaults_highlight() {
        let tier: PricingTier = serde_json::from_value(serde_json::json!({
            "id": "starter",
            "name": "Starter",
            "tagline": "t",
            "setupPrice": "$300",
            "monthlyPrice": "$150",
            "description": "d",
            "features": ["a"]
        }))
        .unwrap();
        assert_eq!(tier.setup_price, "$300");
        assert!(!tier.highlighted);
    }

    #[test]
    fn whatsapp_text_is_encoded() {
        let link = whatsapp_link("Hi, I'm interested in the", "Growth");
        assert_eq!(
            link,
            "https://wa.me/905360330996?text=Hi%2C%20I%27m%20interested%20in%20the%20Growth"
        );
    }
}
