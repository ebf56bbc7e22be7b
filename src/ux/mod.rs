use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use crate::engine::{ChatReply, CommandOutput, ReplyKind};
use crate::schema::SchemaSummary;

pub fn print_banner(schema_path: &Path) {
    println!("{}", "┏━━━━━━━━━━━━━━━━━━━ Corisa ━━━━━━━━━━━━━━━━━━━┓".bold());
    println!("   Describe your app in English; the schema and");
    println!("   placeholder code evolve with every prompt.");
    println!("{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold());
    println!("schema file: {}", schema_path.display().to_string().cyan());
    println!("type {} for commands, {} to quit\n", "'help'".bold(), "'exit'".bold());
}

pub fn print_chat_reply(reply: &ChatReply) {
    match reply.kind {
        ReplyKind::Success => {
            println!("{} {}", "corisa:".green().bold(), reply.message);
            for (key, count) in reply.modifications.counts() {
                println!("  {} {}: {} new", "+".green(), key, count);
            }
        }
        ReplyKind::Info => {
            println!("{} {}", "corisa:".cyan().bold(), reply.message);
            if reply.modifications.is_empty() && reply.message.contains("Overview") {
                print_summary(&reply.schema_summary);
            }
        }
    }
}

pub fn print_command_output(out: &CommandOutput) {
    match out {
        CommandOutput::Text(text) => println!("{} {}", "corisa:".cyan().bold(), text),
        CommandOutput::Summary(summary) => {
            println!("{} Current Schema Overview", "corisa:".cyan().bold());
            print_summary(summary);
        }
    }
}

fn print_summary(s: &SchemaSummary) {
    println!(
        "  {}: {}   {}: {}   {}: {}   {}: {}",
        "pages".bold(), s.pages,
        "sections".bold(), s.sections,
        "services".bold(), s.services,
        "buttons".bold(), s.buttons,
    );
    println!(
        "  {}: {}   {}: {}   {}: {}",
        "components".bold(), s.components,
        "repositories".bold(), s.repositories,
        "menus".bold(), s.menus,
    );
}

pub fn print_generated_code(code: &str) {
    println!("\n{}", "Generated Code".bold());
    println!("{}", "=".repeat(50));
    println!("{code}");
    println!("{}", "=".repeat(50));
}

pub fn print_error(err: &dyn std::fmt::Display) {
    eprintln!("{} {}", "error:".red().bold(), err);
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}
