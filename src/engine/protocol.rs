/// What a line typed in the interactive session asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Generate,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let input = line.trim().to_lowercase();
        match input.as_str() {
            "yes" | "y" => SessionCommand::Generate,
            "q" | "quit" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(input),
        }
    }
}
