//! Quest progression constants and validation helpers.
//!
//! Defaults are applied explicitly at the operation boundary rather
//! than as schema-level column defaults, so the rules live here and
//! are visible to both the DB and API layers.

/// XP awarded by a quest when none is specified at creation.
pub const DEFAULT_QUEST_XP: i64 = 10;

/// XP a freshly created character starts with.
pub const STARTING_CHARACTER_XP: i64 = 0;

/// Validate that a character name is non-empty.
pub fn validate_character_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Character name must not be empty".to_string());
    }
    Ok(())
}

/// Validate that a quest description is non-empty.
pub fn validate_quest_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Quest description must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_character_name_accepted() {
        assert!(validate_character_name("Aria").is_ok());
    }

    #[test]
    fn test_empty_character_name_rejected() {
        let result = validate_character_name("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Character name"));
    }

    #[test]
    fn test_whitespace_character_name_rejected() {
        assert!(validate_character_name("   ").is_err());
    }

    #[test]
    fn test_valid_quest_description_accepted() {
        assert!(validate_quest_description("Slay the slime").is_ok());
    }

    #[test]
    fn test_empty_quest_description_rejected() {
        let result = validate_quest_description("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Quest description"));
    }

    #[test]
    fn test_default_quest_xp_is_ten() {
        assert_eq!(DEFAULT_QUEST_XP, 10);
    }

    #[test]
    fn test_characters_start_at_zero_xp() {
        assert_eq!(STARTING_CHARACTER_XP, 0);
    }
}
