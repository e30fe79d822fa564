use yew::prelude::*;

use crate::components::{
    contact_section::ContactSection, hero::HeroSection, pricing::PricingSection,
    products::ProductsSection, services::ServicesSection, skills::SkillsSection,
    story::StorySection,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing">
            <HeroSection />
            <ServicesSection />
            <PricingSection />
            <ProductsSection />
            <SkillsSection />
            <StorySection />
            <ContactSection />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                    color: #000;
                    background: #fff;
                }
                .section-header {
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .section-header h2 {
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    font-weight: 900;
                    margin: 1.5rem 0 1rem;
                }
                .section-header p {
                    font-size: 1.125rem;
                    color: rgba(0, 0, 0, 0.7);
                }
                .badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 9999px;
                    font-size: 0.875rem;
                }
                .badge-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #000;
                }
                "#}
            </style>
        </main>
    }
}
