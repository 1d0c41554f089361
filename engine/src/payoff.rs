//! Payoff table: the single authority mapping profiles to payoff vectors
//!
//! The table is built from a sparse list of entries and then completed
//! against the game's strategy sets. Any profile the sparse list does not
//! cover receives an explicit zero vector, and lookups of unknown profiles
//! fall back to the same default.

use crate::profile::{enumerate, profile_count, StrategyProfile};
use serde::ser::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;

/// Payoff assumed for any player in a profile the input never specified.
pub const MISSING_PAYOFF: f64 = 0.0;

/// One row of the table: a profile and one payoff per player.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffEntry {
    pub strategy_profile: StrategyProfile,
    pub payoffs: Vec<f64>,
}

impl PayoffEntry {
    /// Create an entry
    pub fn new(strategy_profile: StrategyProfile, payoffs: Vec<f64>) -> Self {
        PayoffEntry {
            strategy_profile,
            payoffs,
        }
    }
}

/// Profile-keyed payoff storage.
///
/// Entries keep insertion order (enumeration order once completed); the
/// index maps each profile to its position in `entries`.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffTable {
    num_players: usize,
    entries: Vec<PayoffEntry>,
    index: HashMap<StrategyProfile, usize>,
}

impl PayoffTable {
    /// Build a complete table from sparse entries.
    ///
    /// Equivalent to `from_sparse` followed by `complete`.
    pub fn build<I>(num_players: usize, strategies: &[Vec<String>], sparse: I) -> Self
    where
        I: IntoIterator<Item = PayoffEntry>,
    {
        let mut table = Self::from_sparse(num_players, sparse);
        table.complete(strategies);
        table
    }

    /// Load sparse entries without completing. Duplicate profiles overwrite
    /// earlier ones.
    pub fn from_sparse<I>(num_players: usize, sparse: I) -> Self
    where
        I: IntoIterator<Item = PayoffEntry>,
    {
        let mut table = PayoffTable {
            num_players,
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for entry in sparse {
            table.insert(entry);
        }
        table
    }

    /// Insert or overwrite the entry for a profile.
    ///
    /// Payoff vectors are fitted to one value per player: short vectors are
    /// padded with `MISSING_PAYOFF`, long ones truncated.
    pub fn insert(&mut self, mut entry: PayoffEntry) {
        if entry.payoffs.len() != self.num_players {
            log::warn!(
                "payoff vector for {} has {} values, expected {}",
                entry.strategy_profile,
                entry.payoffs.len(),
                self.num_players
            );
            entry.payoffs.resize(self.num_players, MISSING_PAYOFF);
        }
        match self.index.get(&entry.strategy_profile) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index
                    .insert(entry.strategy_profile.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Complete the table against `strategies`.
    ///
    /// Afterwards the table holds exactly one entry per enumerated profile, in
    /// enumeration order. Missing profiles are zero-filled; entries whose
    /// profile is not part of the product are dropped. Running this again
    /// with the same strategy sets leaves the table unchanged.
    pub fn complete(&mut self, strategies: &[Vec<String>]) {
        let mut filled = 0usize;
        let mut entries = Vec::with_capacity(profile_count(strategies));
        for profile in enumerate(strategies) {
            let payoffs = match self.index.get(&profile) {
                Some(&slot) => self.entries[slot].payoffs.clone(),
                None => {
                    filled += 1;
                    self.zero_vector()
                }
            };
            entries.push(PayoffEntry::new(profile, payoffs));
        }
        let dropped = self.entries.len() + filled - entries.len();
        if filled > 0 || dropped > 0 {
            log::debug!(
                "payoff table completed: {} zero-filled, {} outside the strategy sets dropped",
                filled,
                dropped
            );
        }
        self.index = entries
            .iter()
            .enumerate()
            .map(|(slot, e)| (e.strategy_profile.clone(), slot))
            .collect();
        self.entries = entries;
    }

    /// Payoff vector for `profile`, or a zero vector when the profile is
    /// unknown.
    pub fn lookup(&self, profile: &StrategyProfile) -> Cow<'_, [f64]> {
        match self.index.get(profile) {
            Some(&slot) => Cow::Borrowed(&self.entries[slot].payoffs),
            None => Cow::Owned(self.zero_vector()),
        }
    }

    /// Payoff to a single player, with the same zero default as `lookup`.
    pub fn payoff(&self, profile: &StrategyProfile, player: usize) -> f64 {
        self.index
            .get(profile)
            .and_then(|&slot| self.entries[slot].payoffs.get(player))
            .copied()
            .unwrap_or(MISSING_PAYOFF)
    }

    /// All entries in table order
    pub fn entries(&self) -> &[PayoffEntry] {
        &self.entries
    }

    /// Number of players each vector covers
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn zero_vector(&self) -> Vec<f64> {
        vec![MISSING_PAYOFF; self.num_players]
    }
}

impl Serialize for PayoffTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|s| s.iter().map(|x| (*x).to_owned()).collect())
            .collect()
    }

    fn entry(profile: &[&str], payoffs: &[f64]) -> PayoffEntry {
        PayoffEntry::new(StrategyProfile::from(profile), payoffs.to_vec())
    }

    #[test]
    fn test_lookup_missing_profile_is_zero_vector() {
        let table = PayoffTable::from_sparse(3, Vec::new());
        let got = table.lookup(&StrategyProfile::from(&["a", "b", "c"][..]));
        assert_eq!(got.as_ref(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_complete_fills_every_profile() {
        let s = sets(&[&["U", "D"], &["L", "R"]]);
        let table = PayoffTable::build(2, &s, vec![entry(&["U", "L"], &[3.0, 1.0])]);
        assert_eq!(table.len(), 4);
        assert_eq!(table.entries()[0].payoffs, vec![3.0, 1.0]);
        for e in &table.entries()[1..] {
            assert_eq!(e.payoffs, vec![0.0, 0.0]);
        }
    }

    #[test]
    fn test_complete_is_idempotent() {
        let s = sets(&[&["U", "D"], &["L", "R"]]);
        let sparse = vec![entry(&["D", "R"], &[2.0, -2.0])];
        let once = PayoffTable::build(2, &s, sparse.clone());
        let mut twice = PayoffTable::build(2, &s, sparse);
        twice.complete(&s);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicate_entries_last_write_wins() {
        let s = sets(&[&["U"], &["L"]]);
        let table = PayoffTable::build(
            2,
            &s,
            vec![entry(&["U", "L"], &[1.0, 1.0]), entry(&["U", "L"], &[5.0, 6.0])],
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.payoff(&StrategyProfile::from(&["U", "L"][..]), 1), 6.0);
    }

    #[test]
    fn test_entries_outside_product_are_dropped() {
        let s = sets(&[&["U"], &["L"]]);
        let table = PayoffTable::build(
            2,
            &s,
            vec![entry(&["U", "L"], &[1.0, 1.0]), entry(&["X", "L"], &[9.0, 9.0])],
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.payoff(&StrategyProfile::from(&["X", "L"][..]), 0), 0.0);
    }

    #[test]
    fn test_payoff_vectors_fitted_to_player_count() {
        let s = sets(&[&["U"], &["L"]]);
        let table = PayoffTable::build(2, &s, vec![entry(&["U", "L"], &[4.0])]);
        assert_eq!(table.entries()[0].payoffs, vec![4.0, 0.0]);

        let table = PayoffTable::build(2, &s, vec![entry(&["U", "L"], &[4.0, 5.0, 6.0])]);
        assert_eq!(table.entries()[0].payoffs, vec![4.0, 5.0]);
    }

    #[test]
    fn test_empty_strategy_set_gives_empty_table() {
        let s = sets(&[&["U", "D"], &[]]);
        let table = PayoffTable::build(2, &s, vec![entry(&["U", "L"], &[1.0, 1.0])]);
        assert!(table.is_empty());
    }
}
