use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, Month};

/// The twelve tropical signs, in calendar order starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ZodiacError {
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("unknown zodiac sign: {0}")]
    UnknownSign(String),
}

/// First day of each sign, sorted by (month, day). Anything before Jan 20
/// falls back to Capricorn, which wraps around the new year.
const SIGN_STARTS: [(Month, u8, ZodiacSign); 12] = [
    (Month::January, 20, ZodiacSign::Aquarius),
    (Month::February, 19, ZodiacSign::Pisces),
    (Month::March, 21, ZodiacSign::Aries),
    (Month::April, 20, ZodiacSign::Taurus),
    (Month::May, 21, ZodiacSign::Gemini),
    (Month::June, 21, ZodiacSign::Cancer),
    (Month::July, 23, ZodiacSign::Leo),
    (Month::August, 23, ZodiacSign::Virgo),
    (Month::September, 23, ZodiacSign::Libra),
    (Month::October, 23, ZodiacSign::Scorpio),
    (Month::November, 22, ZodiacSign::Sagittarius),
    (Month::December, 22, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Resolve the sign for a birthdate. The year is ignored.
    pub fn from_birthdate(date: Date) -> Self {
        let key = (date.month() as u8, date.day());
        SIGN_STARTS
            .iter()
            .rev()
            .find(|(month, day, _)| key >= (*month as u8, *day))
            .map(|(_, _, sign)| *sign)
            .unwrap_or(ZodiacSign::Capricorn)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZodiacSign {
    type Err = ZodiacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.as_str() == s)
            .ok_or_else(|| ZodiacError::UnknownSign(s.to_string()))
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<Date, ZodiacError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ZodiacError::InvalidDate(raw.to_string()))
}

/// Parse a birthdate string and resolve its sign in one step.
pub fn sign_for_birthdate(raw: &str) -> Result<ZodiacSign, ZodiacError> {
    parse_date(raw).map(ZodiacSign::from_birthdate)
}

mod sql {
    use sqlx::{
        encode::IsNull,
        error::BoxDynError,
        postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
        Decode, Encode, Postgres, Type,
    };

    use super::ZodiacSign;

    // Stored as TEXT, constrained by a CHECK in the migrations.
    impl Type<Postgres> for ZodiacSign {
        fn type_info() -> PgTypeInfo {
            <&str as Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <&str as Type<Postgres>>::compatible(ty)
        }
    }

    impl Encode<'_, Postgres> for ZodiacSign {
        fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
            <&str as Encode<Postgres>>::encode_by_ref(&self.as_str(), buf)
        }
    }

    impl<'r> Decode<'r, Postgres> for ZodiacSign {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            let label = <&str as Decode<Postgres>>::decode(value)?;
            Ok(label.parse()?)
        }
    }
}
