pub mod cache;
pub mod provider;

// the site has no accounts, so every evaluation identifies as the same
// synthetic visitor
pub const VISITOR_ID: &str = "website-visitor";

pub const SUBSTACK_WIDGET: &str = "substack_widget_enabled";
pub const TWITTER_WIDGET: &str = "twitter_widget_enabled";
pub const MAIL_ANIMATION: &str = "mail_animation_enabled";
pub const TEXT_FLIP_ANIMATION: &str = "text_flip_animation_enabled";

/// Hardcoded fallback used whenever the provider cannot answer.
/// Unknown keys show their content rather than hide it.
pub fn default_value(key: &str) -> bool {
    match key {
        SUBSTACK_WIDGET => true,
        TWITTER_WIDGET => true,
        MAIL_ANIMATION => true,
        TEXT_FLIP_ANIMATION => true,
        _ => true,
    }
}
