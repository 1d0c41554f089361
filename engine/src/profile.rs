//! Strategy profiles and their enumeration
//!
//! A profile holds one strategy name per player, in player order. Profiles
//! are compared element-wise, so they can key a map directly without being
//! joined into a delimited string.

use serde::Serialize;
use std::fmt;

/// One strategy choice per player, indexed by player position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StrategyProfile(Vec<String>);

impl StrategyProfile {
    /// Create a profile from per-player strategy names
    pub fn new(choices: Vec<String>) -> Self {
        StrategyProfile(choices)
    }

    /// Number of players covered by this profile
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the profile of a game with no players
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strategy chosen by `player`
    pub fn get(&self, player: usize) -> Option<&str> {
        self.0.get(player).map(String::as_str)
    }

    /// All choices in player order
    pub fn choices(&self) -> &[String] {
        &self.0
    }

    /// The same profile with `player` switched to `strategy`.
    ///
    /// Every other player's choice is held fixed, which is exactly the
    /// unilateral deviation the solvers compare against.
    pub fn deviate(&self, player: usize, strategy: &str) -> Self {
        let mut choices = self.0.clone();
        choices[player] = strategy.to_owned();
        StrategyProfile(choices)
    }
}

impl From<Vec<String>> for StrategyProfile {
    fn from(choices: Vec<String>) -> Self {
        StrategyProfile(choices)
    }
}

impl From<&[&str]> for StrategyProfile {
    fn from(choices: &[&str]) -> Self {
        StrategyProfile(choices.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl fmt::Display for StrategyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

/// Number of profiles in the Cartesian product of `sets`.
pub fn profile_count(sets: &[Vec<String>]) -> usize {
    sets.iter().map(Vec::len).product()
}

/// Lazily enumerate every strategy profile over `sets`.
///
/// Player 0 varies slowest and the last player fastest. Any empty set makes
/// the product empty. The iterator borrows `sets` and can be recreated at
/// will, so enumeration is restartable and side-effect free.
pub fn enumerate(sets: &[Vec<String>]) -> Profiles<'_> {
    let cursor = if sets.iter().any(Vec::is_empty) {
        None
    } else {
        Some(vec![0; sets.len()])
    };
    Profiles {
        sets,
        cursor,
        remaining: profile_count(sets),
    }
}

/// Odometer-style iterator over the Cartesian product of strategy sets.
#[derive(Debug, Clone)]
pub struct Profiles<'a> {
    sets: &'a [Vec<String>],
    /// Index into each set for the next profile; None once exhausted
    cursor: Option<Vec<usize>>,
    remaining: usize,
}

impl Iterator for Profiles<'_> {
    type Item = StrategyProfile;

    fn next(&mut self) -> Option<StrategyProfile> {
        let cursor = self.cursor.as_mut()?;
        let profile = StrategyProfile(
            cursor
                .iter()
                .zip(self.sets)
                .map(|(&i, set)| set[i].clone())
                .collect(),
        );
        self.remaining = self.remaining.saturating_sub(1);

        // Advance from the last player; carry into earlier players on wrap.
        let mut exhausted = true;
        for pos in (0..cursor.len()).rev() {
            cursor[pos] += 1;
            if cursor[pos] < self.sets[pos].len() {
                exhausted = false;
                break;
            }
            cursor[pos] = 0;
        }
        if exhausted {
            self.cursor = None;
        }
        Some(profile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.cursor.is_some() { self.remaining } else { 0 };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Profiles<'_> {}
