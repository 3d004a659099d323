//! 対話による確認の実装（CLI 境界）
//!
//! stdin/stderr を用いた対話は adapter 層の責務。
//! `--yes` / `--no-interactive` 用に常に承認・常に拒否する実装も置く。

use crate::domain::{ConfirmPrompt, Decision};
use crate::ports::outbound::Confirmation;
use common::error::Error;
use std::io::{self, BufRead, Write};

/// 入力行を判定する（y / yes のみ承認、大文字小文字は問わない）
fn decide(line: &str) -> Decision {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Decision::Confirmed,
        _ => Decision::Declined,
    }
}

/// CLI 対話による確認
///
/// 既定は拒否（Enter のみは No）。
#[derive(Debug, Clone, Default)]
pub struct CliConfirmation;

impl CliConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmation for CliConfirmation {
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<Decision, Error> {
        eprintln!("============ {} =============", prompt.title);
        eprintln!("  {}", prompt.message);
        eprint!("{} [y/N]: ", prompt.confirm_label);
        let _ = io::stderr().flush();

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read confirmation: {}", e)))?;
        if read == 0 {
            // EOF は拒否扱い
            return Ok(Decision::Declined);
        }
        Ok(decide(&line))
    }
}

/// `--yes`: 常に承認を返す
#[derive(Debug, Clone, Default)]
pub struct AssumeYesConfirmation;

impl Confirmation for AssumeYesConfirmation {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> Result<Decision, Error> {
        Ok(Decision::Confirmed)
    }
}

/// 非対話用: 常に拒否を返す（CI 等でプロンプトを出さない）
#[derive(Debug, Clone, Default)]
pub struct NonInteractiveConfirmation;

impl Confirmation for NonInteractiveConfirmation {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> Result<Decision, Error> {
        Ok(Decision::Declined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide() {
        assert_eq!(decide("y\n"), Decision::Confirmed);
        assert_eq!(decide(" YES "), Decision::Confirmed);
        assert_eq!(decide("\n"), Decision::Declined);
        assert_eq!(decide("no"), Decision::Declined);
        assert_eq!(decide("yeah"), Decision::Declined);
    }

    #[test]
    fn test_assume_yes_always_confirmed() {
        let c = AssumeYesConfirmation;
        assert_eq!(c.confirm(&ConfirmPrompt::delete()).unwrap(), Decision::Confirmed);
    }

    #[test]
    fn test_non_interactive_always_declined() {
        let c = NonInteractiveConfirmation;
        assert_eq!(c.confirm(&ConfirmPrompt::edit()).unwrap(), Decision::Declined);
    }
}
