//! Names and dispatch rules for the custom DOM notifications.

/// Dispatched on a watched element when a click lands outside of it.
pub const CLICK_OUTSIDE_EVENT: &str = "clickoutside";

/// Dispatched on a dialog once its `open` attribute is set.
pub const OPEN_EVENT: &str = "open";

/// Dispatched (bubbling) when a dialog or sheet asks to be closed.
pub const CLOSE_EVENT: &str = "close";

pub const ESCAPE_KEY: &str = "Escape";

/// A click counts as outside when its target is not inside the watched
/// element and nothing has already handled it.
pub fn is_outside_click(target_inside: bool, default_prevented: bool) -> bool {
    !target_inside && !default_prevented
}

pub fn is_escape(key: &str) -> bool {
    key == ESCAPE_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_click_truth_table() {
        assert!(is_outside_click(false, false));
        assert!(!is_outside_click(true, false));
        assert!(!is_outside_click(false, true));
        assert!(!is_outside_click(true, true));
    }

    #[test]
    fn test_escape_key() {
        assert!(is_escape("Escape"));
        assert!(!is_escape("Esc"));
        assert!(!is_escape("Enter"));
    }
}
