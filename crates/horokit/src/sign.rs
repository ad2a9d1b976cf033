//! Zodiac signs and their display labels

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Zodiac sign selecting which prediction to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
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

/// All twelve signs in zodiac order
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Lowercase token used in prediction URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    /// Russian display label
    pub fn label(&self) -> &'static str {
        match self {
            Sign::Aries => "Овен",
            Sign::Taurus => "Телец",
            Sign::Gemini => "Близнецы",
            Sign::Cancer => "Рак",
            Sign::Leo => "Лев",
            Sign::Virgo => "Дева",
            Sign::Libra => "Весы",
            Sign::Scorpio => "Скорпион",
            Sign::Sagittarius => "Стрелец",
            Sign::Capricorn => "Козерог",
            Sign::Aquarius => "Водолей",
            Sign::Pisces => "Рыбы",
        }
    }
}

/// Look up the Russian label for an arbitrary sign token.
///
/// Unknown tokens are passed through unchanged so a caller-supplied key
/// still renders something sensible.
pub fn label_for(key: &str) -> &str {
    match Sign::from_str(key) {
        Ok(sign) => sign.label(),
        Err(_) => key,
    }
}

impl FromStr for Sign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aries" => Ok(Sign::Aries),
            "taurus" => Ok(Sign::Taurus),
            "gemini" => Ok(Sign::Gemini),
            "cancer" => Ok(Sign::Cancer),
            "leo" => Ok(Sign::Leo),
            "virgo" => Ok(Sign::Virgo),
            "libra" => Ok(Sign::Libra),
            "scorpio" => Ok(Sign::Scorpio),
            "sagittarius" => Ok(Sign::Sagittarius),
            "capricorn" => Ok(Sign::Capricorn),
            "aquarius" => Ok(Sign::Aquarius),
            "pisces" => Ok(Sign::Pisces),
            _ => Err(format!("Unknown sign: {}", s)),
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_from_str() {
        assert_eq!(Sign::from_str("aries").unwrap(), Sign::Aries);
        assert_eq!(Sign::from_str("ARIES").unwrap(), Sign::Aries);
        assert_eq!(Sign::from_str("Pisces").unwrap(), Sign::Pisces);
        assert!(Sign::from_str("ophiuchus").is_err());
        assert!(Sign::from_str("").is_err());
    }

    #[test]
    fn test_round_trip_all_signs() {
        for sign in ALL_SIGNS {
            assert_eq!(Sign::from_str(sign.as_str()).unwrap(), sign);
            assert_eq!(sign.to_string(), sign.as_str());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Sign::Aries.label(), "Овен");
        assert_eq!(Sign::Scorpio.label(), "Скорпион");
        assert_eq!(Sign::Pisces.label(), "Рыбы");
    }

    #[test]
    fn test_label_for_known_and_unknown() {
        assert_eq!(label_for("leo"), "Лев");
        assert_eq!(label_for("Leo"), "Лев");
        assert_eq!(label_for("dragon"), "dragon");
    }

    #[test]
    fn test_serde_form() {
        let json = serde_json::to_string(&Sign::Sagittarius).unwrap();
        assert_eq!(json, "\"sagittarius\"");
        let sign: Sign = serde_json::from_str("\"cancer\"").unwrap();
        assert_eq!(sign, Sign::Cancer);
    }
}
