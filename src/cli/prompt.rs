//! Line input for the interactive onboarding, using rustyline

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::questions::{Question, QuestionKind};

/// What the user typed at a question prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Raw answer value, already mapped from an option number
    Answer(String),
    Back,
    Quit,
}

/// Readline wrapper for answering questions
pub struct Prompt {
    editor: DefaultEditor,
    prompt: String,
}

impl Prompt {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(Prompt {
            editor,
            prompt: "> ".to_string(),
        })
    }

    /// Read a line of input from user
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF (Ctrl-D) or interrupt (Ctrl-C)
    /// - Err on other readline errors
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}

/// Interpret a line typed at `question`'s prompt
///
/// For choice questions a 1-based option number selects that option;
/// anything else is passed through as the raw value.
pub fn interpret(question: &Question, line: &str) -> Input {
    let line = line.trim();
    match line {
        "b" | "back" => return Input::Back,
        "q" | "quit" => return Input::Quit,
        _ => {}
    }

    match question.kind {
        QuestionKind::SingleChoice => Input::Answer(option_value(question, line)),
        QuestionKind::MultiChoice => {
            let values: Vec<String> = line
                .split(',')
                .map(|part| option_value(question, part.trim()))
                .collect();
            Input::Answer(values.join(","))
        }
        QuestionKind::Text | QuestionKind::Numeric | QuestionKind::Date => {
            Input::Answer(line.to_string())
        }
    }
}

fn option_value(question: &Question, token: &str) -> String {
    token
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.options.get(i))
        .map(|option| option.value.clone())
        .unwrap_or_else(|| token.to_string())
}
