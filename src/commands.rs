use std::io::Error as IoError;

use serde_json::{to_string_pretty, Error as JsonError};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::instrument;

use crate::{
    config::{Command, Config, LanguagesCommand, SynthesizeCommand, VoicesCommand},
    error::StudioError,
    prompt::{Prompt, PromptError},
    selection::{list_languages, resolve_voice, voice_label},
    service::SpeechBackend,
    studio::Studio,
};

/// Errors, that may happen during command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    StudioError(#[from] StudioError),

    #[error("{0}")]
    PromptError(#[from] PromptError),

    #[error("Unable to serialize voices: {0}")]
    JsonError(#[from] JsonError),

    #[error("Terminal IO error: {0}")]
    IoError(#[from] IoError),
}

/// Execute a single CLI command.
///
/// Interactive session reads answers from `input`, all commands write to `output`.
pub async fn execute<B, R, W>(
    command: &Command,
    config: &Config,
    studio: &mut Studio<B>,
    input: R,
    output: &mut W,
) -> Result<(), CommandError>
where
    B: SpeechBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match command {
        Command::Languages(command) => languages(command, studio, output).await?,
        Command::Voices(command) => voices(command, studio, output).await?,
        Command::Synthesize(command) => synthesize(command, config, studio, output).await?,
        Command::Session(_) => {
            Prompt::new(input, output, config.default_text(), config.output())
                .run(studio)
                .await?
        }
    }

    output.flush().await?;

    Ok(())
}

#[instrument(skip_all, err)]
async fn languages<B, W>(
    command: &LanguagesCommand,
    studio: &mut Studio<B>,
    output: &mut W,
) -> Result<(), CommandError>
where
    B: SpeechBackend,
    W: AsyncWrite + Unpin,
{
    if command.refresh {
        studio.refresh();
    }

    // Empty catalog is not an error here, there is just nothing to choose from.
    let languages = list_languages(studio.catalog().await?.as_ref());

    if languages.is_empty() {
        output.write_all(b"No voices are available\n").await?;
    }

    for language in languages {
        output.write_all(format!("{}\n", language).as_bytes()).await?;
    }

    Ok(())
}

#[instrument(skip_all, fields(language = %command.language), err)]
async fn voices<B, W>(
    command: &VoicesCommand,
    studio: &mut Studio<B>,
    output: &mut W,
) -> Result<(), CommandError>
where
    B: SpeechBackend,
    W: AsyncWrite + Unpin,
{
    if command.refresh {
        studio.refresh();
    }

    let voices = studio.voices(&command.language).await?;

    if command.json {
        output.write_all(to_string_pretty(&voices)?.as_bytes()).await?;
        output.write_all(b"\n").await?;
    } else {
        for voice in &voices {
            output
                .write_all(format!("{}\t{} Hz\n", voice_label(voice), voice.sample_rate_hz).as_bytes())
                .await?;
        }
    }

    Ok(())
}

#[instrument(skip_all, fields(language = %command.language, voice = %command.voice), err)]
async fn synthesize<B, W>(
    command: &SynthesizeCommand,
    config: &Config,
    studio: &mut Studio<B>,
    output: &mut W,
) -> Result<(), CommandError>
where
    B: SpeechBackend,
    W: AsyncWrite + Unpin,
{
    if command.refresh {
        studio.refresh();
    }

    let voices = studio.voices(&command.language).await?;
    let filtered: Vec<_> = voices.iter().collect();
    let voice = resolve_voice(&filtered, &command.voice)?;

    let text = command.text.as_deref().unwrap_or_else(|| config.default_text());
    let path = command.output.as_ref().unwrap_or_else(|| config.output());

    studio.synthesize(text, &command.language, voice).await?;

    if let Some(saved) = studio.save_last(path).await {
        output
            .write_all(format!("Saved {} bytes to {}\n", saved?, path.display()).as_bytes())
            .await?;
    }

    Ok(())
}
