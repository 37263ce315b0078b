use std::{io::Error as IoError, path::Path};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{instrument, warn};

use crate::{
    error::StudioError,
    selection::{resolve_voice, voice_label},
    service::SpeechBackend,
    studio::Studio,
    voice::VoiceRecord,
};

/// Errors, that end an interactive session.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Terminal IO error: {0}")]
    IoError(#[from] IoError),

    #[error("{0}")]
    StudioError(#[from] StudioError),
}

/// Line-oriented interactive session.
///
/// Each round asks for a language, a voice and a text, synthesizes it and saves the result.
/// Failed rounds are reported and the session continues with a new one, until input is closed.
pub struct Prompt<'p, R, W> {
    input: Lines<R>,
    output: &'p mut W,
    default_text: &'p str,
    output_path: &'p Path,
}

impl<'p, R, W> Prompt<'p, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: &'p mut W, default_text: &'p str, output_path: &'p Path) -> Self {
        Self {
            input: input.lines(),
            output,
            default_text,
            output_path,
        }
    }

    /// Ask a question and wait for an answer.
    ///
    /// Returns [`None`] if input was closed.
    async fn ask(&mut self, question: &str) -> Result<Option<String>, IoError> {
        self.output.write_all(question.as_bytes()).await?;
        self.output.flush().await?;

        Ok(self
            .input
            .next_line()
            .await?
            .map(|line| String::from(line.trim())))
    }

    async fn say(&mut self, message: &str) -> Result<(), IoError> {
        self.output.write_all(message.as_bytes()).await?;
        self.output.write_all(b"\n").await
    }

    /// Run rounds until input is closed.
    #[instrument(skip(self, studio), err)]
    pub async fn run<B>(mut self, studio: &mut Studio<B>) -> Result<(), PromptError>
    where
        B: SpeechBackend,
    {
        loop {
            match self.round(studio).await {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(PromptError::StudioError(StudioError::EmptyCatalog)) => {
                    self.say("No voices are available, voice selection is disabled.")
                        .await?;
                    return Ok(());
                }
                Err(PromptError::StudioError(e)) => {
                    warn!(inner = %e, "Action failed");
                    self.say(&format!("Error: {}", e)).await?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Single language-voice-text round.
    ///
    /// Returns `false` if input was closed.
    async fn round<B>(&mut self, studio: &mut Studio<B>) -> Result<bool, PromptError>
    where
        B: SpeechBackend,
    {
        let languages: Vec<_> = studio.languages().await?.into_iter().collect();

        self.say("Languages:").await?;
        for (i, language) in languages.iter().enumerate() {
            self.say(&format!("{:>4}. {}", i + 1, language)).await?;
        }

        let language = loop {
            let answer = match self.ask("Language: ").await? {
                Some(answer) => answer,
                None => return Ok(false),
            };

            match pick(&languages, &answer, |language| language == &answer) {
                Some(language) => break language.clone(),
                None => self.say(&format!("Unknown language \"{}\"", answer)).await?,
            }
        };

        let voices = studio.voices(&language).await?;

        self.say("Voices:").await?;
        for (i, voice) in voices.iter().enumerate() {
            self.say(&format!("{:>4}. {}", i + 1, voice_label(voice)))
                .await?;
        }

        let voice = loop {
            let answer = match self.ask("Voice: ").await? {
                Some(answer) => answer,
                None => return Ok(false),
            };

            match select_voice(&voices, &answer) {
                Ok(voice) => break voice.clone(),
                Err(e) => self.say(&format!("{}, please select again", e)).await?,
            }
        };

        let text = match self
            .ask(&format!("Text [{}]: ", self.default_text))
            .await?
        {
            Some(text) if !text.is_empty() => text,
            Some(_) => String::from(self.default_text),
            None => return Ok(false),
        };

        studio.synthesize(&text, &language, &voice).await?;

        if let Some(saved) = studio.save_last(self.output_path).await {
            let bytes = saved?;
            self.say(&format!(
                "Saved {} bytes to {}",
                bytes,
                self.output_path.display()
            ))
            .await?;
        }

        Ok(true)
    }
}

/// Pick an item either by its 1-based position, or by a predicate.
fn pick<'i, T, F>(items: &'i [T], answer: &str, matches: F) -> Option<&'i T>
where
    F: Fn(&T) -> bool,
{
    match answer.parse::<usize>() {
        Ok(position) if position >= 1 => items.get(position - 1),
        _ => items.iter().find(|item| matches(item)),
    }
}

fn select_voice<'v>(voices: &'v [VoiceRecord], answer: &str) -> Result<&'v VoiceRecord, StudioError> {
    if let Some(voice) = pick(voices, answer, |_| false) {
        return Ok(voice);
    }

    let filtered: Vec<_> = voices.iter().collect();

    resolve_voice(&filtered, answer)
}
