//! Most-active participant rankings.

use std::collections::HashMap;

use serde::Serialize;

use super::Analyzer;

/// One sender with a message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub name: String,
    pub messages: usize,
}

/// One sender's percentage share of the whole chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    /// Share of total messages, rounded to 2 decimal places.
    pub percent: f64,
}

/// The busy-users result: a top-five table plus every sender's share.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// Top five senders by message count.
    pub top: Vec<UserCount>,
    /// Every sender's percentage of total messages; sums to 100 modulo
    /// rounding.
    pub shares: Vec<UserShare>,
}

impl Analyzer {
    /// Ranks senders by message count over the whole record set.
    ///
    /// Overall view only, so no filter parameter. The sentinel
    /// notification sender counts like any other, as do records without a
    /// valid timestamp. Ties keep first-encountered transcript order.
    pub fn most_busy_users(&self) -> BusyUsers {
        let total = self.records().len();
        if total == 0 {
            return BusyUsers::default();
        }

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut tallies: Vec<(&str, usize)> = Vec::new();
        for record in self.records() {
            match index.get(record.sender.as_str()) {
                Some(&i) => tallies[i].1 += 1,
                None => {
                    index.insert(&record.sender, tallies.len());
                    tallies.push((&record.sender, 1));
                }
            }
        }
        tallies.sort_by(|a, b| b.1.cmp(&a.1));

        let top = tallies
            .iter()
            .take(5)
            .map(|(name, messages)| UserCount {
                name: (*name).to_string(),
                messages: *messages,
            })
            .collect();

        let shares = tallies
            .iter()
            .map(|(name, count)| UserShare {
                name: (*name).to_string(),
                percent: round2(*count as f64 / total as f64 * 100.0),
            })
            .collect();

        BusyUsers { top, shares }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
