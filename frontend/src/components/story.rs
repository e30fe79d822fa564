use yew::prelude::*;

use crate::config;
use crate::i18n::use_i18n;
use crate::rotator::hook::use_rotator;

#[derive(Clone, PartialEq)]
pub struct StoryStep {
    pub number: &'static str,
    pub year: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
}

pub fn story_steps() -> Vec<StoryStep> {
    vec![
        StoryStep {
            number: "01",
            year: "2022",
            title_key: "story.theBeginning",
            description_key: "story.beginningDesc",
        },
        StoryStep {
            number: "02",
            year: "2023",
            title_key: "story.theEvolution",
            description_key: "story.evolutionDesc",
        },
        StoryStep {
            number: "03",
            year: "2024",
            title_key: "story.theExpansion",
            description_key: "story.expansionDesc",
        },
        StoryStep {
            number: "04",
            year: "2025+",
            title_key: "story.theVision",
            description_key: "story.visionDesc",
        },
    ]
}

/// Width of the progress bar, in percent, with `index` as the active step.
pub fn progress_percent(index: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    (index + 1) as f64 / len as f64 * 100.0
}

const VALUES: [&str; 3] = ["story.clarityFirst", "story.purposeDriven", "story.ideasToImpact"];

#[function_component(StorySection)]
pub fn story_section() -> Html {
    let i18n = use_i18n();
    let stepper = use_rotator(story_steps, config::STORY_STEPPER);
    let current = stepper.current_index();

    let steps = stepper.items().iter().enumerate().map(|(index, step)| {
        let active = index == current;
        html! {
            <div key={index} class={classes!("story-step", active.then(|| "active"))} onclick={stepper.go_to::<MouseEvent>(index)}>
                <div class="step-number">{step.number}</div>
                <div class="step-card">
                    <span class="step-year">{step.year}</span>
                    <h4>{i18n.t(step.title_key)}</h4>
                    <p>{i18n.t(step.description_key)}</p>
                </div>
            </div>
        }
    });

    let toggle_label = if stepper.auto_play() {
        format!("❚❚ {}", i18n.t("story.pause"))
    } else {
        format!("▶ {}", i18n.t("story.play"))
    };

    html! {
        <section id="story" class="story">
            <div class="section-header">
                <div class="badge">
                    <span class="badge-dot"></span>
                    <span>{i18n.t("story.badge")}</span>
                </div>
                <h2>{i18n.t("story.title")}</h2>
                <p>{i18n.t("story.founderIntro")}</p>
            </div>

            <div class="story-grid">
                <div class="story-copy">
                    <div class="story-text">{i18n.t("story.text")}</div>
                    <div class="story-card">
                        <h3>{"🎯 "}{i18n.t("story.ourMission")}</h3>
                        <p>{i18n.t("story.missionText")}</p>
                    </div>
                    <div class="story-card">
                        <h3>{"✨ "}{i18n.t("story.ourVision")}</h3>
                        <p>{i18n.t("story.visionText")}</p>
                    </div>
                    <div class="pills">
                        { for VALUES.iter().map(|key| html! { <div class="pill">{i18n.t(key)}</div> }) }
                    </div>
                </div>

                <div class="story-timeline">
                    <h3>{i18n.t("story.ourJourney")}</h3>
                    <div class="timeline">{ for steps }</div>
                    <div class="progress">
                        <div class="progress-track">
                            <div class="progress-fill" style={format!("width: {}%;", progress_percent(current, stepper.len()))}></div>
                        </div>
                        <span>{format!("{}/{}", current + 1, stepper.len())}</span>
                    </div>
                    <button class="story-toggle" onclick={stepper.toggle_auto_play::<MouseEvent>()}>
                        {toggle_label}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .story {
                    padding: 6rem 1.5rem;
                    background: #fff;
                }
                .section-header {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 5rem;
                }
                .section-header h2 {
                    font-size: 3rem;
                    margin: 1.5rem 0 1rem;
                }
                .section-header p {
                    font-size: 1.25rem;
                    color: rgba(0, 0, 0, 0.7);
                }
                .story-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .story-text, .story-card {
                    background: #fafafa;
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 1.5rem;
                }
                .story-card {
                    border: 2px solid #000;
                    transition: transform 0.3s ease;
                }
                .story-card:hover {
                    transform: translate(4px, 4px);
                }
                .timeline {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .story-step {
                    display: flex;
                    gap: 2rem;
                    cursor: pointer;
                    transition: transform 0.5s ease;
                }
                .step-number {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 2px solid rgba(0, 0, 0, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    color: rgba(0, 0, 0, 0.4);
                    transition: all 0.5s ease;
                }
                .step-card {
                    flex: 1;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    background: #fafafa;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    transition: all 0.5s ease;
                }
                .step-year {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                    background: rgba(0, 0, 0, 0.05);
                }
                .story-step.active .step-number {
                    background: #000;
                    border-color: #000;
                    color: #fff;
                    transform: scale(1.1);
                }
                .story-step.active .step-card {
                    background: #000;
                    color: #fff;
                }
                .story-step.active .step-year {
                    background: rgba(255, 255, 255, 0.2);
                }
                .progress {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .progress-track {
                    flex: 1;
                    height: 4px;
                    background: rgba(0, 0, 0, 0.1);
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .progress-fill {
                    height: 100%;
                    background: #000;
                    transition: width 0.5s ease;
                }
                .story-toggle {
                    display: block;
                    margin: 1.5rem auto 0;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: rgba(0, 0, 0, 0.05);
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .story-grid {
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
    fn four_steps_in_order() {
        let steps = story_steps();
        let numbers: Vec<_> = steps.iter().map(|step| step.number).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
    }

    #[test]
    fn progress_tracks_the_active_step() {
        assert_eq!(progress_percent(0, 4), 25.0);
        assert_eq!(progress_percent(3, 4), 100.0);
        assert_eq!(progress_percent(0, 0), 0.0);
    }
}
