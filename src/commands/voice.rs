//! Voice task entry command.
//!
//! Runs one recognition session with the configured recognizer and submits
//! the transcript as a new task. `--audio` bypasses local recognition and
//! uploads a recording for server-side transcription instead.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::speech::{CommandEngine, Language, SessionOutcome, SpeechCapture};
use crate::libs::task::Category;
use crate::libs::view::View;
use crate::{msg_error, msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VoiceArgs {
    /// Recognition language code (e.g. hi-IN); defaults to the configured one
    #[arg(short, long)]
    lang: Option<String>,
    /// Task category
    #[arg(short, long, value_enum, default_value = "personal")]
    category: Category,
    /// Upload a pre-recorded audio file for server-side transcription
    #[arg(short, long)]
    audio: Option<PathBuf>,
}

pub async fn cmd(args: VoiceArgs) -> Result<()> {
    let mut controller = super::controller()?;

    if let Some(audio) = &args.audio {
        controller.add_task_from_audio(audio, args.category).await?;
        msg_success!(Message::AudioTaskCreated);
        View::tasks(controller.tasks(), |id| controller.is_deleting(id));
        return Ok(());
    }

    let config = Config::read()?;
    let speech = config.speech.ok_or_else(|| msg_error_anyhow!(Message::SpeechNotConfigured))?;
    let command = speech.command.clone().ok_or_else(|| msg_error_anyhow!(Message::SpeechNotConfigured))?;
    let language = match args.lang {
        Some(code) => Language::from_code(&code).ok_or_else(|| msg_error_anyhow!(Message::UnknownLanguage(code)))?,
        None => speech.language(),
    };

    let engine = CommandEngine::from_command_line(&command)?;
    let mut capture = SpeechCapture::new(engine).with_language(language);

    msg_info!(Message::SpeechListening(language.label().to_string()));

    let category = args.category;
    let controller_ref = &mut controller;
    let outcome = capture
        .run_session(move |text| async move { controller_ref.add_task(&text, category).await })
        .await;

    match outcome {
        Ok(SessionOutcome::Transcript(text)) => {
            msg_success!(Message::VoiceTaskAdded(text));
            View::tasks(controller.tasks(), |id| controller.is_deleting(id));
        }
        Ok(SessionOutcome::NothingRecognized) => {
            msg_warning!(Message::SpeechNothingRecognized);
        }
        Ok(SessionOutcome::Failed { code }) => {
            msg_error!(Message::SpeechError(code));
        }
        Err(err) => {
            msg_error!(Message::VoiceTaskFailed(err.to_string()));
            return Err(err);
        }
    }
    Ok(())
}
