use super::EXIT_SUCCESS;
use crate::error::CliError;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

fn render<C: CommandFactory>(shell: Shell, out: &mut impl Write) {
    clap_complete::generate(shell, &mut C::command(), "modsum", out);
}

// Every subcommand returns a Result so `main` can dispatch uniformly.
#[allow(clippy::unnecessary_wraps)]
pub fn run<C: CommandFactory>(shell: Shell) -> Result<u8, CliError> {
    render::<C>(shell, &mut std::io::stdout());
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    #[command(name = "modsum")]
    struct Fake {
        #[arg(long)]
        file: Option<String>,
    }

    #[test]
    fn renders_bash_script_for_binary_name() {
        let mut out = Vec::new();
        render::<Fake>(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("_modsum"));
        assert!(script.contains("--file"));
    }
}
