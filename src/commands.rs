use crate::i18n::Lang;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Draw,
    Reset,
    /// Ask for confirmation, then reshuffle.
    Restart,
    Lang(Lang),
    Status,
    Help,
    Quit,
    /// Known command with bad arguments; carries the usage line.
    Usage(&'static str),
    Unknown(String),
}

pub const HELP: &str = "Commands: <enter> or DRAW, RESET, RESTART, LANG <et|en>, STATUS, HELP, QUIT";

/// Parses a line of input. Matching is case-insensitive and an empty line
/// draws, like tapping the card.
pub fn parse(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Command::Draw;
    };

    match head.to_ascii_uppercase().as_str() {
        "DRAW" => Command::Draw,
        "RESET" => Command::Reset,
        "RESTART" => Command::Restart,
        "LANG" => match parts.next().map(str::parse::<Lang>) {
            Some(Ok(lang)) => Command::Lang(lang),
            _ => Command::Usage("Usage: LANG <et|en>"),
        },
        "STATUS" => Command::Status,
        "HELP" => Command::Help,
        "QUIT" | "EXIT" => Command::Quit,
        _ => Command::Unknown(head.to_string()),
    }
}

/// Whether an answer to the restart prompt affirms it.
pub fn is_affirmative(answer: &str, lang: Lang) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == lang.t("restart.yes") || matches!(answer.as_str(), "y" | "yes" | "jah")
}
