use yew::prelude::*;

use crate::config;
use crate::i18n::use_i18n;
use crate::rotator::hook::use_rotator;

#[derive(Clone, PartialEq)]
pub struct HeroSlide {
    pub image: &'static str,
    pub title_key: &'static str,
    pub subtitle_key: &'static str,
}

pub fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            image: "/assets/hero1.png",
            title_key: "home.slide1Title",
            subtitle_key: "home.slide1Subtitle",
        },
        HeroSlide {
            image: "/assets/hero2.png",
            title_key: "home.slide2Title",
            subtitle_key: "home.slide2Subtitle",
        },
        HeroSlide {
            image: "/assets/hero3.png",
            title_key: "home.slide3Title",
            subtitle_key: "home.slide3Subtitle",
        },
    ]
}

const STATS: [(&str, &str); 3] = [("100+", "home.stat1"), ("50+", "home.stat2"), ("95%", "home.stat3")];

const PILLS: [&str; 3] = ["home.strategicBranding", "home.digitalProducts", "home.fullSupport"];

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let i18n = use_i18n();
    let carousel = use_rotator(hero_slides, config::HERO_CAROUSEL);
    let current = carousel.current_index();

    let slides = carousel.items().iter().enumerate().map(|(index, slide)| {
        let active = index == current;
        html! {
            <div
                key={index}
                class={classes!("slide", active.then(|| "active"))}
                style={format!("background-image: url({});", slide.image)}
            >
                <div class="slide-overlay"></div>
                <div class="slide-caption">
                    <h3>{i18n.t(slide.title_key)}</h3>
                    <p>{i18n.t(slide.subtitle_key)}</p>
                </div>
            </div>
        }
    });

    let dots = (0..carousel.len()).map(|index| {
        html! {
            <button
                key={index}
                class={classes!("dot", (index == current).then(|| "active"))}
                aria-label={format!("{} {}", i18n.t("home.goToSlide"), index + 1)}
                onclick={carousel.go_to::<MouseEvent>(index)}
            />
        }
    });

    let (toggle_label, toggle_icon) = if carousel.auto_play() {
        (i18n.t("home.pauseAutoplay"), "❚❚")
    } else {
        (i18n.t("home.resumeAutoplay"), "▶")
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="badge">
                        <span class="badge-dot"></span>
                        <span>{i18n.t("home.badge")}</span>
                    </div>
                    <h1>{i18n.t("home.mainTitle")}</h1>
                    <div class="title-rule"></div>
                    <p class="hero-tagline">{i18n.t("home.tagline")}</p>
                    <div class="pills">
                        { for PILLS.iter().map(|key| html! { <div class="pill">{i18n.t(key)}</div> }) }
                    </div>
                    <div class="hero-ctas">
                        <a href="#contact" class="cta-primary">{i18n.t("home.bookConsultation")}<span class="arrow">{"→"}</span></a>
                        <a href="#services" class="cta-secondary">{i18n.t("home.learnMore")}</a>
                    </div>
                    <div class="stats">
                        { for STATS.iter().map(|(number, key)| html! {
                            <div class="stat">
                                <div class="stat-number">{*number}</div>
                                <div class="stat-label">{i18n.t(key)}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="carousel">
                    { for slides }
                    <button class="carousel-arrow prev" aria-label={i18n.t("home.previousSlide")} onclick={carousel.previous::<MouseEvent>()}>
                        {"‹"}
                    </button>
                    <button class="carousel-arrow next" aria-label={i18n.t("home.nextSlide")} onclick={carousel.next::<MouseEvent>()}>
                        {"›"}
                    </button>
                    <div class="dots">{ for dots }</div>
                    <button class="autoplay-toggle" aria-label={toggle_label} onclick={carousel.toggle_auto_play::<MouseEvent>()}>
                        {toggle_icon}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    background: #fafafa;
                    padding: 7rem 1.5rem 3rem;
                }
                .hero-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    background: rgba(0, 0, 0, 0.05);
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    color: rgba(0, 0, 0, 0.7);
                }
                .badge-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #000;
                    animation: pulse 2s infinite;
                }
                @keyframes pulse {
                    50% { opacity: 0.4; }
                }
                .hero h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin: 1.5rem 0 1rem;
                }
                .title-rule {
                    height: 4px;
                    width: 5rem;
                    background: #000;
                    border-radius: 9999px;
                }
                .hero-tagline {
                    font-size: 1.25rem;
                    color: rgba(0, 0, 0, 0.7);
                    max-width: 36rem;
                }
                .pills {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .pill {
                    padding: 0.5rem 1rem;
                    background: #000;
                    color: #fafafa;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                }
                .hero-ctas {
                    display: flex;
                    gap: 1rem;
                    padding-top: 2rem;
                }
                .cta-primary, .cta-secondary {
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .cta-primary {
                    background: #000;
                    color: #fafafa;
                }
                .cta-primary:hover {
                    transform: scale(1.05);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                }
                .cta-primary .arrow {
                    margin-left: 0.5rem;
                }
                .cta-secondary {
                    background: rgba(0, 0, 0, 0.05);
                    color: #000;
                }
                .stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(0, 0, 0, 0.1);
                }
                .stat-number {
                    font-size: 2rem;
                    font-weight: 700;
                }
                .stat-label {
                    font-size: 0.875rem;
                    color: rgba(0, 0, 0, 0.6);
                }
                .carousel {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .slide {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0;
                    transform: scale(0.95);
                    pointer-events: none;
                    transition: opacity 1s ease-in-out, transform 1s ease-in-out;
                }
                .slide.active {
                    opacity: 1;
                    transform: scale(1);
                    pointer-events: auto;
                }
                .slide-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.3), transparent);
                }
                .slide-caption {
                    position: absolute;
                    bottom: 2rem;
                    left: 2rem;
                    color: #fff;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.7s ease 0.3s, transform 0.7s ease 0.3s;
                }
                .slide.active .slide-caption {
                    opacity: 1;
                    transform: translateY(0);
                }
                .carousel-arrow, .autoplay-toggle {
                    position: absolute;
                    z-index: 10;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.9);
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .carousel-arrow {
                    top: 50%;
                    transform: translateY(-50%);
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.5rem;
                }
                .carousel-arrow.prev { left: 1rem; }
                .carousel-arrow.next { right: 1rem; }
                .autoplay-toggle {
                    top: 1rem;
                    right: 1rem;
                    width: 2rem;
                    height: 2rem;
                    font-size: 0.7rem;
                }
                .dots {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                    z-index: 10;
                }
                .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.5);
                    cursor: pointer;
                    transition: width 0.3s ease, background 0.3s ease;
                }
                .dot.active {
                    width: 2rem;
                    background: #fff;
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 {
                        font-size: 2.5rem;
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
    fn three_slides_with_distinct_images() {
        let slides = hero_slides();
        assert_eq!(slides.len(), 3);
        assert!(slides.iter().all(|slide| slide.title_key.starts_with("home.")));
        assert_ne!(slides[0].image, slides[1].image);
        assert_ne!(slides[1].image, slides[2].image);
    }
}
