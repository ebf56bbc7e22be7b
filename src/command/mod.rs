use crate::render::RenderTarget;

pub const HELP_TEXT: &str = "\
Commands:
  help                - show this help message
  save                - save the current schema to the YAML file
  show                - show the current schema overview
  clear               - clear conversation history
  exit                - leave the interactive shell

Code generation:
  generate            - generate all code (frontend, backend, database)
  generate frontend   - frontend component stubs only
  generate backend    - backend service stubs only
  generate database   - database schema only

Anything else is treated as a prompt, e.g.:
  \"Add a user profile page with avatar upload\"
  \"Create a payment form\"
  \"Create a customer service with methods: list, create\"";

/// The literal command surface. Anything that does not parse falls through to
/// the classifier pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Save,
    Show,
    Generate(Option<RenderTarget>),
    Clear,
}

/// Case-insensitive, whitespace-trimmed literal match. `generate` optionally
/// takes one renderer target; an unrecognized target is not a command.
pub fn parse(input: &str) -> Option<Command> {
    let lower = input.trim().to_lowercase();
    match lower.as_str() {
        "help" => Some(Command::Help),
        "save" => Some(Command::Save),
        "show" => Some(Command::Show),
        "clear" => Some(Command::Clear),
        _ => {
            let mut parts = lower.split_whitespace();
            if parts.next() != Some("generate") {
                return None;
            }
            match parts.next() {
                None => Some(Command::Generate(None)),
                Some(word) => RenderTarget::parse(word).map(|t| Command::Generate(Some(t))),
            }
        }
    }
}
