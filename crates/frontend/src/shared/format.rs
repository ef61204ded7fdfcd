//! Small display helpers for the taskbar

/// Notification badge text; `None` hides the badge
pub fn notification_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

/// Avatar letter for the profile button
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_badge() {
        assert_eq!(notification_badge(0), None);
        assert_eq!(notification_badge(3).as_deref(), Some("3"));
        assert_eq!(notification_badge(9).as_deref(), Some("9"));
        assert_eq!(notification_badge(10).as_deref(), Some("9+"));
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("employee user"), "E");
        assert_eq!(avatar_initial("  ada"), "A");
        assert_eq!(avatar_initial(""), "?");
    }
}
