/// Commands understood by the site console
///
/// Fixed commands match exactly; `echo` matches on its `"echo "` prefix and
/// carries the rest of the line verbatim. Anything else is [`Command::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Contact,
    Blog,
    Motto,
    Clear,
    Echo(String),
    Unknown(String),
}

const ECHO_PREFIX: &str = "echo ";

impl Command {
    /// Parse an already-trimmed input line
    pub fn parse(input: &str) -> Self {
        match input {
            "help" => Self::Help,
            "about" => Self::About,
            "skills" => Self::Skills,
            "contact" => Self::Contact,
            "blog" => Self::Blog,
            "motto" => Self::Motto,
            "clear" => Self::Clear,
            _ => match input.strip_prefix(ECHO_PREFIX) {
                Some(message) => Self::Echo(message.to_string()),
                None => Self::Unknown(input.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("about"), Command::About);
        assert_eq!(Command::parse("skills"), Command::Skills);
        assert_eq!(Command::parse("contact"), Command::Contact);
        assert_eq!(Command::parse("blog"), Command::Blog);
        assert_eq!(Command::parse("motto"), Command::Motto);
        assert_eq!(Command::parse("clear"), Command::Clear);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Command::parse("HELP"), Command::Unknown("HELP".to_string()));
        assert_eq!(Command::parse("Help"), Command::Unknown("Help".to_string()));
    }

    #[test]
    fn test_parse_echo_keeps_payload_verbatim() {
        assert_eq!(Command::parse("echo hello world"), Command::Echo("hello world".to_string()));
        assert_eq!(Command::parse("echo   spaced"), Command::Echo("  spaced".to_string()));
        assert_eq!(Command::parse("echo <b>x</b>"), Command::Echo("<b>x</b>".to_string()));
    }

    #[test]
    fn test_parse_bare_echo_is_unknown() {
        assert_eq!(Command::parse("echo"), Command::Unknown("echo".to_string()));
    }

    #[test]
    fn test_parse_prefix_of_fixed_command_is_unknown() {
        assert_eq!(Command::parse("help me"), Command::Unknown("help me".to_string()));
        assert_eq!(Command::parse("echoing"), Command::Unknown("echoing".to_string()));
    }
}
