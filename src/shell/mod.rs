use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use crate::command;
use crate::engine::{Engine, ReplyKind};
use crate::render::render;
use crate::ux;

/// Interactive read-dispatch-print loop. Errors are reported and the loop
/// continues; only `exit` or end of input leave it.
pub fn run(engine: &mut Engine) -> Result<()> {
    ux::print_banner(&engine.config().yaml_file);

    loop {
        print!("\n{} ", "you>".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!("\nGoodbye!");
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if let Some(cmd) = command::parse(input) {
            match engine.run_command(cmd) {
                Ok(out) => ux::print_command_output(&out),
                Err(e) => ux::print_error(&e),
            }
            continue;
        }

        match engine.process_prompt(input) {
            Ok(reply) => {
                ux::print_chat_reply(&reply);
                if reply.kind == ReplyKind::Success
                    && ux::confirm("Generate code for these changes?")
                {
                    ux::print_generated_code(&render(engine.schema(), None));
                }
            }
            Err(e) => ux::print_error(&e),
        }
    }
    Ok(())
}

/// Process exactly one prompt, print the outcome, exit.
pub fn run_once(engine: &mut Engine, prompt: &str) -> Result<()> {
    let reply = engine.process_prompt(prompt)?;
    match reply.kind {
        ReplyKind::Success => println!("Schema updated successfully!"),
        ReplyKind::Info => println!("{}", reply.message),
    }
    Ok(())
}
