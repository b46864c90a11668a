use crate::domain::model::DigitBuffer;

/// Inserts `literal` after the first `after` digits once the buffer holds at
/// least `min_digits` digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator {
    pub after: usize,
    pub min_digits: usize,
    pub literal: &'static str,
}

impl Separator {
    /// Fires as soon as a digit exists past the insertion point.
    pub const fn after(after: usize, literal: &'static str) -> Self {
        Self {
            after,
            min_digits: after + 1,
            literal,
        }
    }

    pub const fn when_at_least(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }
}

/// Ordered separator rules for one format. Rules must be sorted by `after`;
/// rules sharing an insertion point are emitted in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rules: &'static [Separator],
}

impl RuleSet {
    pub const fn new(rules: &'static [Separator]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Separator] {
        self.rules
    }

    pub fn apply(&self, digits: &DigitBuffer) -> String {
        let total = digits.len();
        let extra: usize = self.rules.iter().map(|r| r.literal.len()).sum();
        let mut out = String::with_capacity(total + extra);

        // `rules` 的游標，之前的規則都已處理
        let mut next = 0;
        for (consumed, digit) in digits.as_str().chars().enumerate() {
            while let Some(rule) = self.rules.get(next) {
                if rule.after != consumed {
                    break;
                }
                if total >= rule.min_digits {
                    out.push_str(rule.literal);
                }
                next += 1;
            }
            out.push(digit);
        }

        out
    }
}
