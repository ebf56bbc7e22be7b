use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Cli,
    Web,
}

#[derive(Parser, Debug)]
#[command(name = "corisa", version, about = "Schema studio: English prompts in, YAML app schema and code stubs out")]
pub struct Args {
    /// Schema file location
    #[arg(long, default_value = "corisa-app.yaml")]
    pub yaml: String,

    /// Interface mode
    #[arg(long, value_enum, default_value_t = Mode::Cli)]
    pub mode: Mode,

    /// Host for the web interface
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the web interface
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Process exactly one prompt then exit (requires --prompt)
    #[arg(long, default_value_t = false)]
    pub non_interactive: bool,

    #[arg(long)]
    pub prompt: Option<String>,
}
