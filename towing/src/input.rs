use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One of the six level-triggered controls a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Forward,
    Backward,
    Left,
    Right,
    /// Let more rope out (longer tow).
    PayOut,
    /// Reel rope in (shorter tow).
    HaulIn,
}

/// Held controls for the current tick.
///
/// Press events set a flag, release events clear it; the step functions only
/// ever look at the flags, so key repeat is irrelevant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIntents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub pay_out: bool,
    pub haul_in: bool,
}

impl ControlIntents {
    pub fn holding(intents: &[Intent]) -> Self {
        let mut out = Self::default();
        for &i in intents {
            out.set(i, true);
        }
        out
    }

    pub fn set(&mut self, intent: Intent, pressed: bool) {
        match intent {
            Intent::Forward => self.forward = pressed,
            Intent::Backward => self.backward = pressed,
            Intent::Left => self.left = pressed,
            Intent::Right => self.right = pressed,
            Intent::PayOut => self.pay_out = pressed,
            Intent::HaulIn => self.haul_in = pressed,
        }
    }

    pub fn is_held(&self, intent: Intent) -> bool {
        match intent {
            Intent::Forward => self.forward,
            Intent::Backward => self.backward,
            Intent::Left => self.left,
            Intent::Right => self.right,
            Intent::PayOut => self.pay_out,
            Intent::HaulIn => self.haul_in,
        }
    }
}

/// Key name → intent table. Key names are case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, Intent>", into = "HashMap<String, Intent>")]
pub struct KeyBindings {
    keys: HashMap<String, Intent>,
}

impl From<HashMap<String, Intent>> for KeyBindings {
    fn from(raw: HashMap<String, Intent>) -> Self {
        let keys = raw.into_iter().map(|(k, i)| (k.to_lowercase(), i)).collect();
        Self { keys }
    }
}

impl From<KeyBindings> for HashMap<String, Intent> {
    fn from(b: KeyBindings) -> Self {
        b.keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = [
            ("w", Intent::Forward),
            ("arrowup", Intent::Forward),
            ("s", Intent::Backward),
            ("arrowdown", Intent::Backward),
            ("a", Intent::Left),
            ("arrowleft", Intent::Left),
            ("d", Intent::Right),
            ("arrowright", Intent::Right),
            ("r", Intent::PayOut),
            ("f", Intent::HaulIn),
        ]
        .into_iter()
        .map(|(k, i)| (k.to_string(), i))
        .collect();
        Self { keys }
    }
}

impl KeyBindings {
    pub fn bind(&mut self, key: &str, intent: Intent) {
        self.keys.insert(key.to_lowercase(), intent);
    }

    pub fn lookup(&self, key: &str) -> Option<Intent> {
        self.keys.get(&key.to_lowercase()).copied()
    }

    /// Apply a press/release edge. Returns false for unbound keys.
    pub fn apply(&self, intents: &mut ControlIntents, key: &str, pressed: bool) -> bool {
        match self.lookup(key) {
            Some(intent) => {
                intents.set(intent, pressed);
                true
            }
            None => false,
        }
    }
}
