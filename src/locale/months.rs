//! Month-name tables, one per language.

/// Full and abbreviated month names of one language, January first.
#[derive(Debug)]
pub struct MonthNames {
    pub full: [&'static str; 12],
    pub short: [&'static str; 12],
}

impl MonthNames {
    /// Resolve a month name to its number (1-12).
    ///
    /// Matching ignores case and trailing dots, and accepts both the full
    /// and the abbreviated form.
    pub fn month_number(&self, text: &str) -> Option<u32> {
        let wanted = normalize(text);
        if wanted.is_empty() {
            return None;
        }
        self.short
            .iter()
            .zip(self.full.iter())
            .position(|(short, full)| normalize(short) == wanted || normalize(full) == wanted)
            .map(|i| i as u32 + 1)
    }
}

fn normalize(name: &str) -> String {
    name.trim().trim_end_matches('.').to_lowercase()
}

pub(super) const ENGLISH: MonthNames = MonthNames {
    full: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

pub(super) const CHINESE: MonthNames = MonthNames {
    full: [
        "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
        "十二月",
    ],
    short: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
};

pub(super) const JAPANESE: MonthNames = MonthNames {
    full: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    short: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
};

pub(super) const FRENCH: MonthNames = MonthNames {
    full: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
};

pub(super) const GERMAN: MonthNames = MonthNames {
    full: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.",
        "Dez.",
    ],
};
