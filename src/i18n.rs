use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Lang {
    #[default]
    Et,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Et => "et",
            Lang::En => "en",
        }
    }

    /// Looks up `key`, falling back to the key itself.
    pub fn t(self, key: &str) -> &str {
        let table = match self {
            Lang::Et => ET,
            Lang::En => EN,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "et" => Ok(Lang::Et),
            "en" => Ok(Lang::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

const ET: &[(&str, &str)] = &[
    ("lang.estonian", "eesti"),
    ("lang.english", "english"),
    ("restart.title", "Segame kaardid uuesti ära?"),
    ("restart.content", "Praegune seis kaob ja alustame uuest ilusast pakist."),
    ("restart.no", "oops"),
    ("restart.yes", "jap"),
];

const EN: &[(&str, &str)] = &[
    ("lang.estonian", "eesti"),
    ("lang.english", "english"),
    ("restart.title", "Are you sure you want to restart?"),
    ("restart.content", "This will result in your current game state being wiped."),
    ("restart.no", "oops"),
    ("restart.yes", "yeap"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_per_language() {
        assert_eq!(Lang::En.t("restart.yes"), "yeap");
        assert_eq!(Lang::Et.t("restart.yes"), "jap");
        assert_eq!(Lang::Et.t("lang.english"), "english");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(Lang::En.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("EN".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("et".parse::<Lang>(), Ok(Lang::Et));
        assert!("fi".parse::<Lang>().is_err());
    }
}
