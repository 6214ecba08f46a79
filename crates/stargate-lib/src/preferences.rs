//! User preferences as an explicit state value.
//!
//! State is passed down by the caller and replaced wholesale by each update,
//! so there is no shared mutable store to hydrate or lock.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::gate::Gate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Favourite gate codes in the order they were added.
    pub favorites: Vec<String>,
    pub color_mode: ColorMode,
}

/// Update applied by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceAction {
    ToggleFavorite(String),
    AddFavorite(String),
    SetColorMode(ColorMode),
}

impl UserPreferences {
    pub fn is_favorite(&self, code: &str) -> bool {
        self.favorites.iter().any(|fav| fav == code)
    }

    /// Add `code` to the favourites, or remove it if already present.
    #[must_use]
    pub fn toggle_favorite(mut self, code: &str) -> Self {
        if self.is_favorite(code) {
            self.favorites.retain(|fav| fav != code);
        } else {
            self.favorites.push(code.to_string());
        }
        self
    }

    /// Add `code` to the favourites; a code already present is left alone.
    #[must_use]
    pub fn add_favorite(mut self, code: &str) -> Self {
        if !self.is_favorite(code) {
            self.favorites.push(code.to_string());
        }
        self
    }

    #[must_use]
    pub fn set_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Favourite gates from `gates`, keeping the order of `gates`.
    pub fn favorite_gates<'a>(&self, gates: &'a [Gate]) -> Vec<&'a Gate> {
        gates
            .iter()
            .filter(|gate| self.is_favorite(&gate.code))
            .collect()
    }
}

/// Apply `action` to `state`, returning the next state.
#[must_use]
pub fn reduce(state: UserPreferences, action: PreferenceAction) -> UserPreferences {
    match action {
        PreferenceAction::ToggleFavorite(code) => state.toggle_favorite(&code),
        PreferenceAction::AddFavorite(code) => state.add_favorite(&code),
        PreferenceAction::SetColorMode(mode) => state.set_color_mode(mode),
    }
}
