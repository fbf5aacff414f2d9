// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::Path};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::Cli;

/// Prints the completion script of rollcall for a shell.
#[derive(Debug, Clone, Copy)]
pub struct CmdCompletion {
    pub shell: Shell,
}

impl CmdCompletion {
    pub const NAME: &str = "completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("generate-completion")
            .about("Print the shell completion script, for $SHELL if none is given")
            .hide(true)
            .arg(arg!(shell: [SHELL] "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let login_shell = std::env::var("SHELL").ok();
        let shell = Self::pick_shell(
            matches.get_one::<Shell>("shell").copied(),
            login_shell.as_deref(),
        )?;
        Ok(Self { shell })
    }

    fn pick_shell(given: Option<Shell>, login_shell: Option<&str>) -> Result<Shell, String> {
        if let Some(shell) = given {
            return Ok(shell);
        }

        let path = login_shell.ok_or("No shell given and $SHELL is not set")?;
        Shell::from_path(path).ok_or_else(|| {
            let known: Vec<_> = Shell::value_variants()
                .iter()
                .filter_map(|s| s.to_possible_value())
                .map(|v| v.get_name().to_string())
                .collect();
            format!(
                "Cannot tell the shell from $SHELL={path}, pass one of: {}",
                known.join(", ")
            )
        })
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing shell completion...");
        self.write_script(&mut io::stdout());
        Ok(())
    }

    pub fn write_script(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as Builtin;

        match self.shell {
            Shell::Bash => emit(Builtin::Bash, buf),
            Shell::Elvish => emit(Builtin::Elvish, buf),
            Shell::Fish => emit(Builtin::Fish, buf),
            Shell::Nushell => emit(clap_complete_nushell::Nushell {}, buf),
            Shell::PowerShell => emit(Builtin::PowerShell, buf),
            Shell::Zsh => emit(Builtin::Zsh, buf),
        }
    }
}

fn emit(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(generator, &mut cmd, bin, buf);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    #[value(alias = "nu")]
    Nushell,
    #[value(name = "powershell", alias = "pwsh")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// Shell of a login shell path such as `/usr/bin/zsh` or `pwsh.exe`.
    fn from_path(path: &str) -> Option<Self> {
        let name = Path::new(path).file_stem()?.to_str()?;
        Shell::from_str(name, true).ok()
    }
}
