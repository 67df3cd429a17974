//! The closed registry of entity kinds and their ID prefixes.
//!
//! Every ID is minted for exactly one kind, and the kind's prefix becomes
//! the leading tag of the rendered string. The registry is closed: adding a
//! kind means adding a variant here, and unknown kinds are unrepresentable
//! for statically-typed callers. Callers that start from a string (CLI
//! arguments, parsed IDs) go through [`Kind::from_name`] or
//! [`Kind::from_prefix`], which fail with [`IdError::UnknownPrefixKind`].

use crate::error::IdError;

/// An entity kind from the closed registry.
///
/// Each kind maps to a fixed, unique prefix. Prefixes are never reused or
/// renamed once IDs carrying them exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Meal plans (`mp`).
    MealPlan,
    /// Recipes attached to a meal plan (`mpr`).
    MealPlanRecipe,
    /// Recipes (`recipe`).
    Recipe,
    /// User accounts (`acc`).
    Account,
    /// User-authored recipe copies (`userRecipe`).
    UserRecipe,
    /// Ingredients (`ingred`).
    Ingredient,
    /// Grocery lists (`groc`).
    GroceryList,
    /// Recipe collections (`coll`).
    Collection,
    /// Recipes within a collection (`collRec`).
    CollectionRecipe,
    /// Fitness profiles (`fp`).
    FitnessProfile,
    /// Food catalog entries (`food`).
    Food,
    /// Uploaded files (`file`).
    File,
    /// Chat messages (`msg`).
    Message,
    /// Conversations (`conv`).
    Conversation,
    /// Chat sessions (`chat`).
    Chat,
    /// Individual meal plan items (`mpItem`).
    MealPlanItem,
}

impl Kind {
    /// Every kind in the registry, in declaration order.
    pub const ALL: [Kind; 16] = [
        Kind::MealPlan,
        Kind::MealPlanRecipe,
        Kind::Recipe,
        Kind::Account,
        Kind::UserRecipe,
        Kind::Ingredient,
        Kind::GroceryList,
        Kind::Collection,
        Kind::CollectionRecipe,
        Kind::FitnessProfile,
        Kind::Food,
        Kind::File,
        Kind::Message,
        Kind::Conversation,
        Kind::Chat,
        Kind::MealPlanItem,
    ];

    /// Returns the registry name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::MealPlan => "mealPlan",
            Kind::MealPlanRecipe => "mealPlanRecipe",
            Kind::Recipe => "recipe",
            Kind::Account => "account",
            Kind::UserRecipe => "userRecipe",
            Kind::Ingredient => "ingredient",
            Kind::GroceryList => "groceryList",
            Kind::Collection => "collection",
            Kind::CollectionRecipe => "collectionRecipe",
            Kind::FitnessProfile => "fitnessProfile",
            Kind::Food => "food",
            Kind::File => "file",
            Kind::Message => "message",
            Kind::Conversation => "conversation",
            Kind::Chat => "chat",
            Kind::MealPlanItem => "mealPlanItem",
        }
    }

    /// Returns the fixed ID prefix for this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Kind::MealPlan => "mp",
            Kind::MealPlanRecipe => "mpr",
            Kind::Recipe => "recipe",
            Kind::Account => "acc",
            Kind::UserRecipe => "userRecipe",
            Kind::Ingredient => "ingred",
            Kind::GroceryList => "groc",
            Kind::Collection => "coll",
            Kind::CollectionRecipe => "collRec",
            Kind::FitnessProfile => "fp",
            Kind::Food => "food",
            Kind::File => "file",
            Kind::Message => "msg",
            Kind::Conversation => "conv",
            Kind::Chat => "chat",
            Kind::MealPlanItem => "mpItem",
        }
    }

    /// Looks up a kind by its registry name.
    pub fn from_name(name: &str) -> Result<Self, IdError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| IdError::UnknownPrefixKind(name.to_string()))
    }

    /// Looks up a kind by its ID prefix.
    pub fn from_prefix(prefix: &str) -> Result<Self, IdError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.prefix() == prefix)
            .ok_or_else(|| IdError::UnknownPrefixKind(prefix.to_string()))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Kind {
    type Err = IdError;

    /// Accepts either the registry name or the ID prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).or_else(|_| Self::from_prefix(s))
    }
}

impl serde::Serialize for Kind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for Kind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_name(&s).map_err(serde::de::Error::custom)
    }
}
