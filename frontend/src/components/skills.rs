use serde::Deserialize;
use yew::prelude::*;

use crate::i18n::use_i18n;

const COLUMN_SIZE: usize = 3;

#[derive(Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Moon,
    Circle,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Skill {
    pub id: String,
    pub title: String,
    pub icon: SkillIcon,
}

/// First three skills on the left, next three on the right. Anything past six is not shown.
pub fn split_columns(skills: &[Skill]) -> (&[Skill], &[Skill]) {
    let left_end = skills.len().min(COLUMN_SIZE);
    let right_end = skills.len().min(COLUMN_SIZE * 2);
    (&skills[..left_end], &skills[left_end..right_end])
}

fn icon(kind: SkillIcon) -> Html {
    match kind {
        SkillIcon::Circle => html! { <div class="skill-icon circle"></div> },
        SkillIcon::Moon => html! { <div class="skill-icon moon"></div> },
    }
}

fn skill_column(skills: &[Skill], side: &'static str) -> Html {
    html! {
        <div class={classes!("skill-column", side)}>
            { for skills.iter().map(|skill| html! {
                <div key={skill.id.clone()} class="skill">
                    {icon(skill.icon)}
                    <span>{&skill.title}</span>
                </div>
            }) }
        </div>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let i18n = use_i18n();
    let skills: Vec<Skill> = i18n.objects("skills.items");
    let (left, right) = split_columns(&skills);

    html! {
        <section id="skills" class="skills">
            <div class="section-header">
                <span class="eyebrow">{i18n.t("skills.badge")}</span>
                <h2>{i18n.t("skills.title")}</h2>
            </div>
            <div class="skills-layout">
                {skill_column(left, "left")}
                <div class="skills-center">
                    <img src="/assets/logo.png" alt="SIVRA" />
                </div>
                {skill_column(right, "right")}
            </div>
            <p class="skills-description">{i18n.t("skills.description")}</p>
            <style>
                {r#"
                .skills {
                    padding: 6rem 1rem;
                    background: #fff;
                }
                .skills-layout {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr auto 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .skill-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .skill-column.left .skill {
                    flex-direction: row-reverse;
                    text-align: right;
                }
                .skill {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 9999px;
                    transition: background 0.3s ease;
                }
                .skill:hover {
                    background: rgba(0, 0, 0, 0.03);
                }
                .skill-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    flex-shrink: 0;
                }
                .skill-icon.circle {
                    border-radius: 50%;
                    background: #000;
                }
                .skill-icon.moon {
                    border-radius: 50%;
                    box-shadow: inset -6px 0 0 0 #000;
                }
                .skills-center img {
                    width: 12rem;
                    height: 12rem;
                    object-fit: contain;
                }
                .skills-description {
                    max-width: 40rem;
                    margin: 3rem auto 0;
                    text-align: center;
                    color: rgba(0, 0, 0, 0.7);
                }
                @media (max-width: 1024px) {
                    .skills-layout {
                        grid-template-columns: 1fr;
                    }
                    .skill-column.left .skill {
                        flex-direction: row;
                        text-align: left;
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

    fn skills(count: usize) -> Vec<Skill> {
        (0..count)
            .map(|i| Skill {
                id: i.to_string(),
                title: format!("skill {}", i),
                icon: if i % 2 == 0 { SkillIcon::Circle } else { SkillIcon::Moon },
            })
            .collect()
    }

    #[test]
    fn six_skills_split_evenly() {
        let all = skills(6);
        let (left, right) = split_columns(&all);
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
        assert_eq!(right[0].id, "3");
    }

    #[test]
    fn short_and_long_lists() {
        let few = skills(2);
        let (left, right) = split_columns(&few);
        assert_eq!((left.len(), right.len()), (2, 0));

        let many = skills(8);
        let (left, right) = split_columns(&many);
        assert_eq!((left.len(), right.len()), (3, 3));
    }

    #[test]
    fn icon_names_deserialize() {
        let skill: Skill =
            serde_json::from_str(r#"{"id":"a","title":"A","icon":"moon"}"#).unwrap();
        assert_eq!(skill.icon, SkillIcon::Moon);
    }
}
