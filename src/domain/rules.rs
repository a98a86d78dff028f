use std::fmt;

use super::Cell;

/// Rules that produce visually interesting images from a single seed
pub const INTERESTING_RULES: [u8; 17] = [
    30, 45, 57, 60, 67, 73, 90, 91, 107, 110, 124, 129, 131, 135, 137, 147, 150,
];

/// Wolfram rule number of an elementary automaton.
///
/// Bit `i` (least significant first) decides the output of the neighborhood
/// whose numeric value `left*4 + center*2 + right` equals `i`. Read as eight
/// binary digits, the first digit belongs to `111` and the last to `000`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct RuleNumber(u8);

impl RuleNumber {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Keep only the low 8 bits of an arbitrary integer
    pub const fn truncating(value: i64) -> Self {
        Self(value as u8)
    }

    /// Whether an integer is a rule number without truncation
    pub const fn in_range(value: i64) -> bool {
        value >= 0 && value <= u8::MAX as i64
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Output bit for the neighborhood with numeric value `index` (0-7)
    pub const fn bit(self, index: u8) -> bool {
        (self.0 >> (index & 7)) & 1 == 1
    }

    /// Eight binary digits, zero-padded on the left (30 => "00011110")
    pub fn binary(self) -> String {
        format!("{:08b}", self.0)
    }
}

impl From<u8> for RuleNumber {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for RuleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A 3-cell neighborhood (left, center, right)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pattern {
    pub left: Cell,
    pub center: Cell,
    pub right: Cell,
}

impl Pattern {
    pub const fn new(left: Cell, center: Cell, right: Cell) -> Self {
        Self { left, center, right }
    }

    /// Build the pattern whose numeric value is `index` (only the low 3 bits count)
    pub const fn from_index(index: u8) -> Self {
        Self {
            left: Cell::from_bit(index & 0b100 != 0),
            center: Cell::from_bit(index & 0b010 != 0),
            right: Cell::from_bit(index & 0b001 != 0),
        }
    }

    /// Numeric value `left*4 + center*2 + right`
    pub const fn index(self) -> u8 {
        (self.left.bit() << 2) | (self.center.bit() << 1) | self.right.bit()
    }

    pub const fn cells(self) -> [Cell; 3] {
        [self.left, self.center, self.right]
    }

    /// All eight patterns, from `111` down to `000`
    pub fn all() -> impl Iterator<Item = Pattern> {
        (0..8u8).rev().map(Pattern::from_index)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            write!(f, "{}", cell.digit())?;
        }
        Ok(())
    }
}

/// Lookup from neighborhood to next-generation state of its center
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RuleTable {
    rule: RuleNumber,
    outputs: [Cell; 8],
}

impl RuleTable {
    /// Expand the rule into its 8 digits and mark the pattern of every `1` digit.
    /// Digit position 0 corresponds to `111`, position 7 to `000`.
    pub fn new(rule: RuleNumber) -> Self {
        let mut outputs = [Cell::Inactive; 8];
        for (position, digit) in rule.binary().chars().enumerate() {
            if digit == '1' {
                outputs[7 - position] = Cell::Active;
            }
        }
        Self { rule, outputs }
    }

    pub const fn rule(&self) -> RuleNumber {
        self.rule
    }

    /// Next state of the center cell for a neighborhood
    #[inline]
    pub fn apply(&self, pattern: Pattern) -> Cell {
        self.outputs[pattern.index() as usize]
    }

    /// Next state of the center cell for three adjacent cells
    #[inline]
    pub fn next(&self, left: Cell, center: Cell, right: Cell) -> Cell {
        self.apply(Pattern::new(left, center, right))
    }

    /// Patterns that produce an active cell, from `111` down to `000`
    pub fn active_patterns(&self) -> Vec<Pattern> {
        Pattern::all()
            .filter(|pattern| self.apply(*pattern).is_active())
            .collect()
    }

    /// Number of active patterns
    pub fn len(&self) -> usize {
        self.outputs.iter().filter(|cell| cell.is_active()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RuleNumber> for RuleTable {
    fn from(rule: RuleNumber) -> Self {
        Self::new(rule)
    }
}

/// Two-line dump in the usual Wolfram layout:
/// ```text
/// 111 110 101 100 011 010 001 000
///  0   0   0   1   1   1   1   0
/// ```
impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = Pattern::all().map(|p| p.to_string()).collect();
        let outputs: Vec<String> = Pattern::all()
            .map(|p| format!(" {} ", self.apply(p).digit()))
            .collect();
        writeln!(f, "{}", header.join(" "))?;
        write!(f, "{}", outputs.join(" "))
    }
}

/// Default batch: the interesting rules
pub fn interesting_rules() -> Vec<RuleNumber> {
    INTERESTING_RULES.iter().copied().map(RuleNumber::new).collect()
}

/// Every rule number from 0 to 255
pub fn all_rules() -> Vec<RuleNumber> {
    (0..=u8::MAX).map(RuleNumber::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rule_30_patterns() {
        let table = RuleTable::new(RuleNumber::new(30));
        let active: Vec<String> = table.active_patterns().iter().map(|p| p.to_string()).collect();

        assert_eq!(RuleNumber::new(30).binary(), "00011110");
        assert_eq!(active, vec!["100", "011", "010", "001"]);
    }

    #[test]
    fn test_rule_0_is_empty() {
        let table = RuleTable::new(RuleNumber::new(0));
        assert!(table.is_empty());
        assert!(table.active_patterns().is_empty());
    }

    #[test]
    fn test_rule_255_is_full() {
        let table = RuleTable::new(RuleNumber::new(255));
        assert_eq!(table.len(), 8);
        assert!(Pattern::all().all(|p| table.apply(p) == Cell::Active));
    }

    #[test]
    fn test_pattern_index_roundtrip() {
        for index in 0..8u8 {
            assert_eq!(Pattern::from_index(index).index(), index);
        }
        assert_eq!(Pattern::from_index(0b110).to_string(), "110");
    }

    #[test]
    fn test_truncation() {
        assert_eq!(RuleNumber::truncating(256 + 30), RuleNumber::new(30));
        assert_eq!(RuleNumber::truncating(-1), RuleNumber::new(255));
        assert!(RuleNumber::in_range(255));
        assert!(!RuleNumber::in_range(256));
        assert!(!RuleNumber::in_range(-1));
    }

    #[test]
    fn test_display_layout() {
        let table = RuleTable::new(RuleNumber::new(30));
        let text = table.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("111 110 101 100 011 010 001 000"));
        assert_eq!(lines.next(), Some(" 0   0   0   1   1   1   1   0 "));
    }

    #[test]
    fn test_rule_lists() {
        assert_eq!(interesting_rules().len(), INTERESTING_RULES.len());
        assert_eq!(all_rules().len(), 256);
        assert_eq!(all_rules()[0], RuleNumber::new(0));
        assert_eq!(all_rules()[255], RuleNumber::new(255));
    }

    proptest! {
        #[test]
        fn test_table_size_matches_popcount(rule in any::<u8>()) {
            let table = RuleTable::new(RuleNumber::new(rule));
            let active = table.active_patterns();

            prop_assert_eq!(active.len(), rule.count_ones() as usize);
            for pattern in active {
                prop_assert!(RuleNumber::new(rule).bit(pattern.index()));
            }
        }

        #[test]
        fn test_table_is_deterministic(rule in any::<u8>()) {
            prop_assert_eq!(
                RuleTable::new(RuleNumber::new(rule)),
                RuleTable::new(RuleNumber::new(rule))
            );
        }
    }
}
