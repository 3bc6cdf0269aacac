use std::cmp::Ordering;
use std::collections::HashMap;

/// Characters that never take part in collation.
const IGNORED_CHARACTERS: [char; 3] = ['\'', '+', '-'];

/// Orders word names by an alphabet rule.
///
/// A character found in the rule ranks by its position there. Characters missing from
/// the rule rank after every known one, by code point. Ties fall back to plain string
/// order so that sorting is total.
#[derive(Debug, Clone, Default)]
pub struct Collation {
    ranks: HashMap<char, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Known(usize),
    Unknown(u32),
}

impl Collation {
    pub fn from_rule(rule: &str) -> Self {
        let mut ranks = HashMap::new();
        for (position, c) in rule.chars().filter(|c| !IGNORED_CHARACTERS.contains(c)).enumerate() {
            ranks.entry(c).or_insert(position);
        }
        Self { ranks }
    }

    /// A collation without a rule: every character is compared by code point.
    pub fn code_point() -> Self {
        Self::default()
    }

    fn rank(&self, c: char) -> Rank {
        match self.ranks.get(&c) {
            Some(&position) => Rank::Known(position),
            None => Rank::Unknown(c as u32),
        }
    }

    fn key<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Rank> + 'a {
        name.chars()
            .filter(|c| !IGNORED_CHARACTERS.contains(c))
            .map(|c| self.rank(c))
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.key(a).cmp(self.key(b)).then_with(|| a.cmp(b))
    }
}
