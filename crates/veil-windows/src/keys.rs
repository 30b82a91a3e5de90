use veil_core::config::Modifier;

/// Converts a key name string to a Windows virtual key code.
///
/// Supports letters (A–Z), digits (0–9), function keys (F1–F24),
/// and common named keys (Enter, Space, Tab, etc.).
/// Matching is case-insensitive.
pub fn vk_from_name(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();

    // Single letter A–Z
    if upper.len() == 1 {
        let ch = upper.as_bytes()[0];
        if ch.is_ascii_uppercase() {
            return Some(u32::from(ch));
        }
        if ch.is_ascii_digit() {
            return Some(u32::from(ch));
        }
    }

    // Function keys F1–F24
    if let Some(rest) = upper.strip_prefix('F')
        && let Ok(n) = rest.parse::<u32>()
        && (1..=24).contains(&n)
    {
        return Some(0x70 + n - 1); // VK_F1 = 0x70
    }

    match upper.as_str() {
        // Navigation
        "ENTER" | "RETURN" => Some(0x0D),
        "TAB" => Some(0x09),
        "ESCAPE" | "ESC" => Some(0x1B),
        "SPACE" => Some(0x20),
        "BACKSPACE" => Some(0x08),
        "DELETE" | "DEL" => Some(0x2E),
        "INSERT" | "INS" => Some(0x2D),
        "HOME" => Some(0x24),
        "END" => Some(0x23),
        "PAGEUP" | "PGUP" => Some(0x21),
        "PAGEDOWN" | "PGDN" => Some(0x22),

        // Arrow keys
        "LEFT" => Some(0x25),
        "UP" => Some(0x26),
        "RIGHT" => Some(0x27),
        "DOWN" => Some(0x28),

        // Punctuation / OEM keys
        "MINUS" => Some(0xBD),
        "PLUS" | "EQUALS" => Some(0xBB),
        "COMMA" => Some(0xBC),
        "PERIOD" | "DOT" => Some(0xBE),
        "SLASH" => Some(0xBF),
        "SEMICOLON" => Some(0xBA),
        "BACKSLASH" => Some(0xDC),
        "LBRACKET" => Some(0xDB),
        "RBRACKET" => Some(0xDD),
        "QUOTE" => Some(0xDE),
        "BACKTICK" | "GRAVE" => Some(0xC0),

        _ => None,
    }
}

/// Virtual key codes whose held state counts as `modifier`.
///
/// Ctrl, Alt and Shift use the side-agnostic codes; Win has no such
/// code, so both the left and right keys are listed.
pub fn modifier_vks(modifier: Modifier) -> &'static [i32] {
    match modifier {
        Modifier::Ctrl => &[0x11],       // VK_CONTROL
        Modifier::Alt => &[0x12],        // VK_MENU
        Modifier::Shift => &[0x10],      // VK_SHIFT
        Modifier::Win => &[0x5B, 0x5C], // VK_LWIN, VK_RWIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_case_insensitive() {
        // Assert
        assert_eq!(vk_from_name("j"), Some(0x4A));
        assert_eq!(vk_from_name("J"), Some(0x4A));
        assert_eq!(vk_from_name("a"), Some(0x41));
        assert_eq!(vk_from_name("Z"), Some(0x5A));
    }

    #[test]
    fn digits_return_vk_codes() {
        // Assert
        assert_eq!(vk_from_name("0"), Some(0x30));
        assert_eq!(vk_from_name("9"), Some(0x39));
    }

    #[test]
    fn named_keys() {
        // Assert
        assert_eq!(vk_from_name("Enter"), Some(0x0D));
        assert_eq!(vk_from_name("SPACE"), Some(0x20));
        assert_eq!(vk_from_name("esc"), Some(0x1B));
    }

    #[test]
    fn function_keys() {
        // Assert
        assert_eq!(vk_from_name("F1"), Some(0x70));
        assert_eq!(vk_from_name("f12"), Some(0x7B));
    }

    #[test]
    fn arrow_keys_for_opacity_bindings() {
        // Assert
        assert_eq!(vk_from_name("Up"), Some(0x26));
        assert_eq!(vk_from_name("down"), Some(0x28));
    }

    #[test]
    fn win_modifier_checks_both_keys() {
        // Assert
        assert_eq!(modifier_vks(Modifier::Win), &[0x5B, 0x5C]);
        assert_eq!(modifier_vks(Modifier::Ctrl), &[0x11]);
    }

    #[test]
    fn unknown_returns_none() {
        // Assert
        assert_eq!(vk_from_name("INVALID"), None);
        assert_eq!(vk_from_name(""), None);
    }
}
