/// Help content categories (used as file stems in the content tree)
pub const CATEGORY_GAMEPLAY: &str = "gameplay";
pub const CATEGORY_BUBBLES: &str = "bubbles";
pub const CATEGORY_CONTROLS: &str = "controls";
pub const CATEGORY_SCORING: &str = "scoring";
pub const CATEGORY_SETTINGS: &str = "settings";
pub const CATEGORY_TROUBLESHOOTING: &str = "troubleshooting";

/// All help categories
pub fn all_categories() -> Vec<&'static str> {
    vec![
        CATEGORY_GAMEPLAY,
        CATEGORY_BUBBLES,
        CATEGORY_CONTROLS,
        CATEGORY_SCORING,
        CATEGORY_SETTINGS,
        CATEGORY_TROUBLESHOOTING,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_unique() {
        let mut categories = all_categories();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(categories.len(), 6);
    }
}
