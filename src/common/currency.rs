use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

use crate::common::{locale::Language, money::Money};

const ARABIC_DINAR_SYMBOL: &str = "د.ع.";
const ARABIC_GROUP_SEPARATOR: char = '\u{066C}';
const ARABIC_LETTER_MARK: char = '\u{061C}';
const NO_BREAK_SPACE: char = '\u{00A0}';

/// Renders amounts as whole Iraqi dinars in the conventions of the display
/// language.
///
/// Grouping is always computed with the `en` locale and then transliterated
/// for Arabic, so both languages group identically.
///
/// # Examples
/// ```
/// use debt_ledger::common::{currency::CurrencyFormatter, locale::Language, money::Money};
///
/// let fmt = CurrencyFormatter::new(Language::English);
/// assert_eq!(fmt.format(Money::from_units(1500)), "IQD\u{a0}1,500");
///
/// let fmt = CurrencyFormatter::new(Language::Arabic);
/// assert_eq!(fmt.format(Money::from_units(1500)), "١٬٥٠٠\u{a0}د.ع.");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurrencyFormatter {
    language: Language,
    currency: Currency,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl CurrencyFormatter {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            currency: Currency::IQD,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn format(&self, amount: Money) -> String {
        let units = amount.round_to_units();
        let grouped = units.unsigned_abs().to_formatted_string(&Locale::en);
        let negative = units < 0;

        match self.language {
            Language::English => {
                let sign = if negative { "-" } else { "" };
                format!("{sign}{}{NO_BREAK_SPACE}{grouped}", self.currency.code())
            }
            Language::Arabic => {
                let mut out = String::new();
                if negative {
                    out.push(ARABIC_LETTER_MARK);
                    out.push('-');
                }
                out.push_str(&to_arabic_digits(&grouped));
                out.push(NO_BREAK_SPACE);
                out.push_str(ARABIC_DINAR_SYMBOL);
                out
            }
        }
    }
}

/// Swaps ASCII digits for Arabic-Indic ones and commas for the Arabic
/// thousands separator.
pub(crate) fn to_arabic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32('\u{0660}' as u32 + (c as u32 - '0' as u32)).unwrap_or(c),
            ',' => ARABIC_GROUP_SEPARATOR,
            other => other,
        })
        .collect()
}
