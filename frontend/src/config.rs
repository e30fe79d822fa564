use std::time::Duration;

use crate::rotator::state::RotatorTiming;

const DEFAULT_FORM_ID: &str = "YOUR_FORM_ID";
const DEFAULT_FORMSPREE_BASE: &str = "https://formspree.io/f";

/// Hosted Formspree unless `FORMSPREE_BASE` was set at build time (e.g. a local form catcher).
pub fn get_formspree_base() -> &'static str {
    option_env!("FORMSPREE_BASE").unwrap_or(DEFAULT_FORMSPREE_BASE)
}

/// Full submission URL. The form id is baked in at build time from `FORMSPREE_FORM_ID`.
pub fn formspree_endpoint() -> String {
    let form_id = option_env!("FORMSPREE_FORM_ID").unwrap_or(DEFAULT_FORM_ID);
    format!("{}/{}", get_formspree_base(), form_id)
}

pub const HERO_CAROUSEL: RotatorTiming = RotatorTiming {
    interval: Duration::from_millis(5_000),
    cooldown: Duration::from_millis(10_000),
};

pub const STORY_STEPPER: RotatorTiming = RotatorTiming {
    interval: Duration::from_millis(4_000),
    cooldown: Duration::from_millis(10_000),
};

/// How long the "message sent" banner stays up before the form returns to idle.
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

pub const WHATSAPP_URL: &str = "https://wa.me/905360330996";
pub const SHOP_URL: &str = "https://sivra.gumroad.com/";
pub const CONTACT_EMAIL: &str = "sivra.product@gmail.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_form_id() {
        let endpoint = formspree_endpoint();
        let base = format!("{}/", get_formspree_base());
        assert!(endpoint.starts_with(&base));
        assert!(endpoint.len() > base.len());
    }

    #[test]
    fn posts_to_hosted_formspree_by_default() {
        if option_env!("FORMSPREE_BASE").is_none() {
            assert_eq!(get_formspree_base(), "https://formspree.io/f");
            assert!(formspree_endpoint().starts_with("https://formspree.io/f/"));
        }
    }

    #[test]
    fn both_rotators_share_the_cooldown() {
        assert_eq!(HERO_CAROUSEL.cooldown, STORY_STEPPER.cooldown);
        assert!(HERO_CAROUSEL.interval > STORY_STEPPER.interval);
    }
}
