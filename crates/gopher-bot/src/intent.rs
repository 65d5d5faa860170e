//! Command grammar: turns raw message text into an [`Intent`].

use crate::error::{AppError, AppResult};
use lazy_regex::{lazy_regex, Lazy};
use regex::Regex;

/// Caption used when a random gopher is requested.
pub const RANDOM_CAPTION: &str = "Random gopher go!";

// Patterns are checked at compile time by `lazy_regex!`.
static GOPHER_COMMAND: Lazy<Regex> = lazy_regex!(r"^!gopher( [-A-Za-z]+)?$");
static GOPHERS_COMMAND: Lazy<Regex> = lazy_regex!(r"^!gophers$");

/// What a chat command asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `!gopher` or `!gopher <name>`: post one gopher.
    Gopher {
        /// Requested name; `None` picks one at random.
        name: Option<String>,
        /// Text sent with the image.
        caption: String,
    },
    /// `!gophers`: list every gopher name.
    Gophers,
}

impl Intent {
    /// Match `text` against the command grammar.
    ///
    /// `!gopher` is tried before `!gophers`. Anything else is an
    /// [`AppError::UnknownCommand`] carrying the text verbatim.
    pub fn parse(text: &str) -> AppResult<Self> {
        if let Some(captures) = GOPHER_COMMAND.captures(text) {
            let intent = match captures.get(1) {
                Some(m) => {
                    let name = m.as_str().trim_start_matches(' ');
                    Intent::Gopher {
                        caption: introduce(name),
                        name: Some(name.to_string()),
                    }
                }
                None => Intent::Gopher {
                    name: None,
                    caption: RANDOM_CAPTION.to_string(),
                },
            };
            return Ok(intent);
        }

        if GOPHERS_COMMAND.is_match(text) {
            return Ok(Intent::Gophers);
        }

        Err(AppError::UnknownCommand(text.to_string()))
    }

    /// Whether this intent leaves the choice of gopher to chance.
    pub fn is_random(&self) -> bool {
        matches!(self, Intent::Gopher { name: None, .. })
    }
}

/// Caption for a named gopher.
pub fn introduce(name: &str) -> String {
    format!("Introducing Ser {}", title_case(name))
}

/// Reply when a named gopher does not exist.
pub fn unknown_gopher(name: &str) -> String {
    format!("I don't know this \"{}\" guy", name)
}

/// Capitalize each word, where words are separated by `-` or a space.
///
/// The first letter of a word is uppercased and the rest lowercased;
/// separators are kept as they are.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c == '-' || c == ' ' {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_random_gopher() {
        let intent = Intent::parse("!gopher").unwrap();
        assert_eq!(
            intent,
            Intent::Gopher {
                name: None,
                caption: "Random gopher go!".into()
            }
        );
        assert!(intent.is_random());
    }

    #[test]
    fn test_parse_named_gopher() {
        let intent = Intent::parse("!gopher gandalf").unwrap();
        assert_eq!(
            intent,
            Intent::Gopher {
                name: Some("gandalf".into()),
                caption: "Introducing Ser Gandalf".into()
            }
        );
        assert!(!intent.is_random());
    }

    #[test]
    fn test_parse_hyphenated_name() {
        let intent = Intent::parse("!gopher fire-gopher").unwrap();
        assert_eq!(
            intent,
            Intent::Gopher {
                name: Some("fire-gopher".into()),
                caption: "Introducing Ser Fire-Gopher".into()
            }
        );
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(Intent::parse("!gophers").unwrap(), Intent::Gophers);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Intent::parse("!asdf").unwrap_err();
        assert!(matches!(err, AppError::UnknownCommand(ref t) if t == "!asdf"));
        assert_eq!(err.to_string(), "Unknown command: \"!asdf\"");
    }

    #[test]
    fn test_parse_is_anchored() {
        for text in [
            "hello !gopher",
            "!gopher ",
            "!gopher  gandalf",
            "!gopher gandalf the grey",
            "!gophers please",
            " !gophers",
            "!gopher\n",
        ] {
            assert!(Intent::parse(text).is_err(), "{:?} should not match", text);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Intent::parse("!Gopher").is_err());
        assert!(Intent::parse("!GOPHERS").is_err());
    }

    #[test]
    fn test_parse_rejects_non_letters_in_name() {
        assert!(Intent::parse("!gopher gandalf2").is_err());
        assert!(Intent::parse("!gopher gan_dalf").is_err());
        assert!(Intent::parse("!gopher gändalf").is_err());
    }

    #[test]
    fn test_parse_keeps_name_case() {
        let intent = Intent::parse("!gopher GANDALF").unwrap();
        assert_eq!(
            intent,
            Intent::Gopher {
                name: Some("GANDALF".into()),
                caption: "Introducing Ser Gandalf".into()
            }
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("gandalf"), "Gandalf");
        assert_eq!(title_case("fire-gopher"), "Fire-Gopher");
        assert_eq!(title_case("the grey"), "The Grey");
        assert_eq!(title_case("mIxEd-CASE"), "Mixed-Case");
        assert_eq!(title_case("-lead"), "-Lead");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_unknown_gopher_text() {
        assert_eq!(
            unknown_gopher("not-a-gopher"),
            "I don't know this \"not-a-gopher\" guy"
        );
    }
}
