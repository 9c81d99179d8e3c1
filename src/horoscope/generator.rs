use rand::{seq::SliceRandom, Rng};
use time::Date;

use super::content;
use crate::zodiac::ZodiacSign;

const TEMPLATE_COUNT: usize = 4;

/// Pick a passage for `sign` and wrap it in a personalization template.
/// Both choices are uniform over `rng`.
pub fn personalized_text<R: Rng + ?Sized>(sign: ZodiacSign, name: &str, rng: &mut R) -> String {
    let passages = content::passages(sign);
    let passage = passages.choose(rng).copied().unwrap_or(passages[0]);

    match rng.gen_range(0..TEMPLATE_COUNT) {
        0 => format!("{}, {}", name, passage.to_lowercase()),
        1 => format!("Dear {}, {}", name, passage.to_lowercase()),
        2 => format!(
            "{} Remember, {}, your {} energy is particularly strong today.",
            passage, name, sign
        ),
        _ => format!(
            "{} As a {}, {}, you have the power to make this a remarkable day.",
            passage, sign, name
        ),
    }
}

pub fn affirmation(sign: ZodiacSign) -> &'static str {
    content::affirmation(sign)
}

/// Affirmation for a stored sign label; unknown labels get the generic line.
pub fn affirmation_for_label(label: &str) -> &'static str {
    label
        .parse::<ZodiacSign>()
        .map(content::affirmation)
        .unwrap_or(content::GENERIC_AFFIRMATION)
}

pub fn lucky_numbers(sign: ZodiacSign, date: Date) -> [u32; 4] {
    shift_by_day(content::lucky_base(sign), date)
}

pub fn lucky_numbers_for_label(label: &str, date: Date) -> [u32; 4] {
    let base = label
        .parse::<ZodiacSign>()
        .map(content::lucky_base)
        .unwrap_or(content::DEFAULT_LUCKY_BASE);
    shift_by_day(base, date)
}

fn shift_by_day(base: [u32; 4], date: Date) -> [u32; 4] {
    let day = u32::from(date.day());
    base.map(|n| (n + day) % 50 + 1)
}
