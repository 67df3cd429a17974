//! Typed ID definitions for every kind in the registry.
//!
//! Each ID type is bound to one registry kind and carries that kind's
//! prefix. IDs are timestamped 20-byte payloads, base58-encoded for
//! approximate time-sortability and uniqueness.

use crate::define_id;

// =============================================================================
// Meal Planning
// =============================================================================

define_id!(MealPlanId, MealPlan);
define_id!(MealPlanRecipeId, MealPlanRecipe);
define_id!(MealPlanItemId, MealPlanItem);

// =============================================================================
// Recipes and Collections
// =============================================================================

define_id!(RecipeId, Recipe);
define_id!(UserRecipeId, UserRecipe);
define_id!(IngredientId, Ingredient);
define_id!(CollectionId, Collection);
define_id!(CollectionRecipeId, CollectionRecipe);

// =============================================================================
// Accounts and Profiles
// =============================================================================

define_id!(AccountId, Account);
define_id!(FitnessProfileId, FitnessProfile);

// =============================================================================
// Food Catalog and Files
// =============================================================================

define_id!(FoodId, Food);
define_id!(FileId, File);

// =============================================================================
// Grocery
// =============================================================================

define_id!(GroceryListId, GroceryList);

// =============================================================================
// Messaging
// =============================================================================

define_id!(MessageId, Message);
define_id!(ConversationId, Conversation);
define_id!(ChatId, Chat);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_id_roundtrip() {
        let id = RecipeId::new();
        let s = id.to_string();
        let parsed: RecipeId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_recipe_id_prefix() {
        let id = RecipeId::new();
        let s = id.to_string();
        assert!(s.starts_with("recipe_"));
    }

    #[test]
    fn test_recipe_id_rejects_other_prefix() {
        let account = AccountId::new().to_string();
        let encoded = account.split_once('_').unwrap().1.to_string();
        let result: Result<RecipeId, _> = format!("acc_{encoded}").parse();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::InvalidPrefix { .. }
        ));
    }

    #[test]
    fn test_recipe_id_missing_separator() {
        let result: Result<RecipeId, _> = "recipe4QmToXnrbJsLuhYBRB6qFMoqPRp".parse();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::MissingSeparator
        ));
    }

    #[test]
    fn test_recipe_id_empty() {
        let result: Result<RecipeId, _> = "".parse();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), crate::IdError::Empty));
    }

    #[test]
    fn test_recipe_id_invalid_payload() {
        let result: Result<RecipeId, _> = "recipe_notbase58!".parse();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            crate::IdError::InvalidCharacter { .. }
        ));
    }

    #[test]
    fn test_account_id_json_roundtrip() {
        let id = AccountId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_message_id_mint_time() {
        let before = (chrono::Utc::now().timestamp_millis() - crate::EPOCH_MILLIS) as u32;
        let id = MessageId::new();
        let after = (chrono::Utc::now().timestamp_millis() - crate::EPOCH_MILLIS) as u32;

        // Mint time is recoverable to millisecond resolution, modulo the
        // 32-bit horizon.
        let offset = id.raw().timestamp_offset_ms();
        assert!(offset >= before && offset <= after);
        assert_eq!(id.timestamp().timestamp_millis(), id.timestamp_ms());
    }

    #[test]
    fn test_typed_ids_keep_registered_prefixes() {
        assert_eq!(MealPlanId::PREFIX, "mp");
        assert_eq!(MealPlanRecipeId::PREFIX, "mpr");
        assert_eq!(MealPlanItemId::PREFIX, "mpItem");
        assert_eq!(RecipeId::PREFIX, "recipe");
        assert_eq!(UserRecipeId::PREFIX, "userRecipe");
        assert_eq!(IngredientId::PREFIX, "ingred");
        assert_eq!(CollectionId::PREFIX, "coll");
        assert_eq!(CollectionRecipeId::PREFIX, "collRec");
        assert_eq!(AccountId::PREFIX, "acc");
        assert_eq!(FitnessProfileId::PREFIX, "fp");
        assert_eq!(FoodId::PREFIX, "food");
        assert_eq!(FileId::PREFIX, "file");
        assert_eq!(GroceryListId::PREFIX, "groc");
        assert_eq!(MessageId::PREFIX, "msg");
        assert_eq!(ConversationId::PREFIX, "conv");
        assert_eq!(ChatId::PREFIX, "chat");
    }
}
