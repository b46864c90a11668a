use crate::core::rules::{RuleSet, Separator};
use crate::domain::model::{DigitBuffer, FormatKind};
use crate::domain::ports::Mask;

/// 電話號碼在此位數以內時以 2 + 4 + 4 分段
pub const LANDLINE_MAX_DIGITS: usize = 10;

pub const POSTAL: RuleSet = RuleSet::new(&[Separator::after(5, "-")]);

pub const PERSONAL_ID: RuleSet = RuleSet::new(&[
    Separator::after(3, "."),
    Separator::after(6, "."),
    Separator::after(9, "-"),
]);

pub const PHONE_LANDLINE: RuleSet = RuleSet::new(&[
    Separator::after(0, "(").when_at_least(3),
    Separator::after(2, ") "),
    Separator::after(6, "-"),
]);

pub const PHONE_MOBILE: RuleSet = RuleSet::new(&[
    Separator::after(0, "(").when_at_least(3),
    Separator::after(2, ") "),
    Separator::after(7, "-"),
]);

// 斜線後出現第五位數字時才插入連字號
pub const COMPANY_ID: RuleSet = RuleSet::new(&[
    Separator::after(2, "."),
    Separator::after(5, "."),
    Separator::after(8, "/"),
    Separator::after(12, "-"),
]);

impl FormatKind {
    /// The rule set used for a buffer of `digit_count` digits.
    pub fn rules_for(&self, digit_count: usize) -> RuleSet {
        match self {
            FormatKind::Postal => POSTAL,
            FormatKind::PersonalId => PERSONAL_ID,
            FormatKind::Phone if digit_count <= LANDLINE_MAX_DIGITS => PHONE_LANDLINE,
            FormatKind::Phone => PHONE_MOBILE,
            FormatKind::CompanyId => COMPANY_ID,
        }
    }
}

impl Mask for FormatKind {
    fn format(&self, digits: &DigitBuffer) -> String {
        self.rules_for(digits.len()).apply(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(kind: FormatKind, digits: &str) -> String {
        kind.format(&DigitBuffer::from_text(digits))
    }

    #[test]
    fn test_rule_tables_are_sorted_by_insertion_point() {
        for rules in [POSTAL, PERSONAL_ID, PHONE_LANDLINE, PHONE_MOBILE, COMPANY_ID] {
            let points: Vec<usize> = rules.rules().iter().map(|r| r.after).collect();
            let mut sorted = points.clone();
            sorted.sort();
            assert_eq!(points, sorted);
        }
    }

    #[test]
    fn test_postal() {
        assert_eq!(fmt(FormatKind::Postal, "01310930"), "01310-930");
        assert_eq!(fmt(FormatKind::Postal, "013"), "013");
        assert_eq!(fmt(FormatKind::Postal, "01310"), "01310");
        assert_eq!(fmt(FormatKind::Postal, "013109"), "01310-9");
        assert_eq!(fmt(FormatKind::Postal, "0131093012"), "01310-93012");
    }

    #[test]
    fn test_personal_id_layers() {
        assert_eq!(fmt(FormatKind::PersonalId, "123"), "123");
        assert_eq!(fmt(FormatKind::PersonalId, "1234"), "123.4");
        assert_eq!(fmt(FormatKind::PersonalId, "123456"), "123.456");
        assert_eq!(fmt(FormatKind::PersonalId, "1234567"), "123.456.7");
        assert_eq!(fmt(FormatKind::PersonalId, "123456789"), "123.456.789");
        assert_eq!(fmt(FormatKind::PersonalId, "1234567890"), "123.456.789-0");
        assert_eq!(fmt(FormatKind::PersonalId, "12345678901"), "123.456.789-01");
    }

    #[test]
    fn test_personal_id_overlong_tail_is_left_raw() {
        assert_eq!(
            fmt(FormatKind::PersonalId, "12345678901234"),
            "123.456.789-01234"
        );
    }

    #[test]
    fn test_phone_landline() {
        assert_eq!(fmt(FormatKind::Phone, "1"), "1");
        assert_eq!(fmt(FormatKind::Phone, "11"), "11");
        assert_eq!(fmt(FormatKind::Phone, "112"), "(11) 2");
        assert_eq!(fmt(FormatKind::Phone, "112222"), "(11) 2222");
        assert_eq!(fmt(FormatKind::Phone, "1122223"), "(11) 2222-3");
        assert_eq!(fmt(FormatKind::Phone, "1122223333"), "(11) 2222-3333");
    }

    #[test]
    fn test_phone_mobile() {
        assert_eq!(fmt(FormatKind::Phone, "11988887777"), "(11) 98888-7777");
        assert_eq!(fmt(FormatKind::Phone, "119888877776"), "(11) 98888-77776");
    }

    #[test]
    fn test_phone_switches_layout_at_eleventh_digit() {
        assert_eq!(fmt(FormatKind::Phone, "1198888777"), "(11) 9888-8777");
        assert_eq!(fmt(FormatKind::Phone, "11988887777"), "(11) 98888-7777");
    }

    #[test]
    fn test_company_id_layers() {
        assert_eq!(fmt(FormatKind::CompanyId, "12"), "12");
        assert_eq!(fmt(FormatKind::CompanyId, "123"), "12.3");
        assert_eq!(fmt(FormatKind::CompanyId, "123456"), "12.345.6");
        assert_eq!(fmt(FormatKind::CompanyId, "12345678"), "12.345.678");
        assert_eq!(fmt(FormatKind::CompanyId, "123456780"), "12.345.678/0");
        assert_eq!(fmt(FormatKind::CompanyId, "123456780001"), "12.345.678/0001");
        assert_eq!(fmt(FormatKind::CompanyId, "1234567800019"), "12.345.678/0001-9");
        assert_eq!(
            fmt(FormatKind::CompanyId, "12345678000199"),
            "12.345.678/0001-99"
        );
    }

    #[test]
    fn test_apply_reformats_already_masked_text() {
        assert_eq!(FormatKind::CompanyId.apply("12.345.678/000199"), "12.345.678/0001-99");
        assert_eq!(FormatKind::Phone.apply("(11) 9888-87777"), "(11) 98888-7777");
    }

    #[test]
    fn test_every_format_handles_empty_input() {
        for kind in FormatKind::ALL {
            assert_eq!(fmt(kind, ""), "");
        }
    }
}
