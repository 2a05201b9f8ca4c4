//! Shell completion script generation for bash, zsh, and fish.

use clap::Command;
use clap_complete::{generate, Shell};

use crate::error::{PraxisError, Result};

pub const SUPPORTED_SHELLS: [&str; 3] = ["bash", "zsh", "fish"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    pub fn from_name(name: &str) -> Result<ShellType> {
        match name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(PraxisError::Config(format!(
                "Unsupported shell: '{}'. Supported shells are: {}.",
                name,
                SUPPORTED_SHELLS.join(", ")
            ))),
        }
    }

    fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }
}

/// Write the completion script for `shell` to stdout.
pub fn print_completion_script(shell: ShellType, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(shell.to_clap_shell(), cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_shells_parse() {
        assert_eq!(ShellType::from_name("bash").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_name("zsh").unwrap(), ShellType::Zsh);
        assert_eq!(ShellType::from_name("fish").unwrap(), ShellType::Fish);
    }

    #[test]
    fn unknown_shell_is_an_error() {
        assert!(ShellType::from_name("powershell").is_err());
    }
}
