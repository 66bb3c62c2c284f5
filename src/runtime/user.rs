//! User interaction operations (setup prompt, status messages).

use anyhow::Result;

use super::RealRuntime;

use std::io::{self, BufRead, Write};

/// Answer to a setup prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupResponse {
    /// The user chose `setup`.
    Setup,
    /// The user chose `skip`.
    Skip,
    /// The prompt was closed without a recognised choice.
    Dismissed,
}

/// Core, testable implementation that reads from any BufRead and writes to any Write.
pub(crate) fn ask_setup_with_io<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<SetupResponse> {
    write!(output, "{} [setup/skip] ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(SetupResponse::Dismissed);
    }

    let response = match line.trim().to_lowercase().as_str() {
        "setup" | "y" | "yes" => SetupResponse::Setup,
        "skip" | "n" | "no" => SetupResponse::Skip,
        _ => SetupResponse::Dismissed,
    };
    Ok(response)
}

impl RealRuntime {
    pub(crate) fn ask_setup_impl(&self, prompt: &str) -> Result<SetupResponse> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        ask_setup_with_io(prompt, &mut stdin_lock, &mut stdout)
    }

    pub(crate) fn inform_impl(&self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::{SetupResponse, ask_setup_with_io};
    use anyhow::Result;
    use std::io::Cursor;

    fn answer(input: &str) -> Result<SetupResponse> {
        let mut input = Cursor::new(input.as_bytes());
        let mut output = Vec::new();
        ask_setup_with_io("Setup now?", &mut input, &mut output)
    }

    #[test]
    fn accepts_setup_answers() -> Result<()> {
        for case in ["setup\n", "SETUP\n", " yes \n", "y\n"] {
            assert_eq!(answer(case)?, SetupResponse::Setup, "input {:?}", case);
        }
        Ok(())
    }

    #[test]
    fn accepts_skip_answers() -> Result<()> {
        for case in ["skip\n", " Skip\n", "no\n", "N\n"] {
            assert_eq!(answer(case)?, SetupResponse::Skip, "input {:?}", case);
        }
        Ok(())
    }

    #[test]
    fn anything_else_is_dismissed() -> Result<()> {
        for case in ["\n", "   \n", "later\n", ""] {
            assert_eq!(answer(case)?, SetupResponse::Dismissed, "input {:?}", case);
        }
        Ok(())
    }

    #[test]
    fn prompt_lists_choices() -> Result<()> {
        let mut input = Cursor::new(b"skip\n");
        let mut output = Vec::new();
        ask_setup_with_io("No LLDB instance found. Setup now?", &mut input, &mut output)?;
        let out = String::from_utf8(output)?;
        assert_eq!(out, "No LLDB instance found. Setup now? [setup/skip] ");
        Ok(())
    }
}
