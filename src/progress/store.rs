//! Reward store: themes purchasable with level-up coins

use serde::{Deserialize, Serialize};

use crate::core::error::{NovaError, Result};
use crate::core::types::Coins;

/// Theme id everyone starts with
pub const DEFAULT_THEME: &str = "theme-default";

/// A purchasable theme
#[derive(Debug, Clone)]
pub struct ThemeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Coins,
}

/// Everything the store sells
pub static THEME_CATALOG: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: DEFAULT_THEME,
        name: "Default Blue",
        price: 0,
    },
    ThemeDefinition {
        id: "theme-sunset",
        name: "Sunset Orange",
        price: 250,
    },
    ThemeDefinition {
        id: "theme-forest",
        name: "Forest Green",
        price: 250,
    },
    ThemeDefinition {
        id: "theme-midnight",
        name: "Midnight Purple",
        price: 500,
    },
];

/// Look up a theme in the catalog
pub fn get_theme_definition(id: &str) -> Option<&'static ThemeDefinition> {
    THEME_CATALOG.iter().find(|def| def.id == id)
}

/// Store state on the user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub coins: Coins,

    #[serde(default = "default_owned_themes")]
    pub owned_themes: Vec<String>,

    #[serde(default = "default_theme")]
    pub equipped_theme: String,
}

fn default_owned_themes() -> Vec<String> {
    vec![DEFAULT_THEME.to_string()]
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            coins: 0,
            owned_themes: default_owned_themes(),
            equipped_theme: default_theme(),
        }
    }
}

impl StoreState {
    pub fn owns_theme(&self, id: &str) -> bool {
        self.owned_themes.iter().any(|owned| owned == id)
    }
}

/// Buy a theme, debiting coins and adding it to the owned set exactly once.
///
/// Returns the price paid.
pub fn purchase_theme(store: &mut StoreState, theme_id: &str) -> Result<Coins> {
    let def = get_theme_definition(theme_id)
        .ok_or_else(|| NovaError::UnknownTheme(theme_id.to_string()))?;

    if store.owns_theme(theme_id) {
        return Err(NovaError::ThemeAlreadyOwned(theme_id.to_string()));
    }
    if store.coins < def.price {
        return Err(NovaError::InsufficientCoins {
            needed: def.price,
            available: store.coins,
        });
    }

    store.coins -= def.price;
    store.owned_themes.push(theme_id.to_string());
    tracing::info!(theme = theme_id, price = def.price, "theme purchased");
    Ok(def.price)
}

/// Equip an owned theme
pub fn equip_theme(store: &mut StoreState, theme_id: &str) -> Result<()> {
    if get_theme_definition(theme_id).is_none() {
        return Err(NovaError::UnknownTheme(theme_id.to_string()));
    }
    if !store.owns_theme(theme_id) {
        return Err(NovaError::ThemeNotOwned(theme_id.to_string()));
    }
    store.equipped_theme = theme_id.to_string();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_owns_default_theme() {
        let store = StoreState::default();
        assert!(store.owns_theme(DEFAULT_THEME));
        assert_eq!(store.equipped_theme, DEFAULT_THEME);
        assert_eq!(store.coins, 0);
    }

    #[test]
    fn test_purchase_debits_and_adds_once() {
        let mut store = StoreState {
            coins: 300,
            ..StoreState::default()
        };

        let paid = purchase_theme(&mut store, "theme-sunset").unwrap();
        assert_eq!(paid, 250);
        assert_eq!(store.coins, 50);
        assert!(store.owns_theme("theme-sunset"));

        // Second purchase is rejected, nothing double-charged
        let err = purchase_theme(&mut store, "theme-sunset").unwrap_err();
        assert!(matches!(err, NovaError::ThemeAlreadyOwned(_)));
        assert_eq!(store.coins, 50);
        assert_eq!(
            store.owned_themes.iter().filter(|t| *t == "theme-sunset").count(),
            1
        );
    }

    #[test]
    fn test_purchase_insufficient_coins() {
        let mut store = StoreState {
            coins: 100,
            ..StoreState::default()
        };

        let err = purchase_theme(&mut store, "theme-midnight").unwrap_err();
        assert!(matches!(
            err,
            NovaError::InsufficientCoins {
                needed: 500,
                available: 100
            }
        ));
        assert_eq!(store.coins, 100);
        assert!(!store.owns_theme("theme-midnight"));
    }

    #[test]
    fn test_purchase_unknown_theme() {
        let mut store = StoreState::default();
        let err = purchase_theme(&mut store, "theme-lava").unwrap_err();
        assert!(matches!(err, NovaError::UnknownTheme(_)));
    }

    #[test]
    fn test_equip_requires_ownership() {
        let mut store = StoreState {
            coins: 250,
            ..StoreState::default()
        };

        let err = equip_theme(&mut store, "theme-forest").unwrap_err();
        assert!(matches!(err, NovaError::ThemeNotOwned(_)));

        purchase_theme(&mut store, "theme-forest").unwrap();
        equip_theme(&mut store, "theme-forest").unwrap();
        assert_eq!(store.equipped_theme, "theme-forest");
    }
}
