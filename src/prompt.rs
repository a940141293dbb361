use color_eyre::eyre::Result;
use dialoguer::Input;

/// Source of interactive operator answers.
///
/// The run algorithm only ever asks free-form questions, so a single
/// operation is enough; tests substitute a scripted implementation.
pub trait Prompt {
    fn input(&mut self, message: &str) -> Result<String>;
}

/// Prompter backed by the terminal.
pub struct Terminal;

impl Prompt for Terminal {
    fn input(&mut self, message: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
