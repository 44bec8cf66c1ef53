//! Speech capture adapter over a pluggable recognition engine.
//!
//! Models one recognition session as an explicit state machine instead of raw
//! event callbacks: [`SpeechCapture::run_session`] drives the engine's event
//! stream and resolves to a single [`SessionOutcome`]. Sessions are serialized
//! through `&mut self`, and a language change takes effect on the next session.
//!
//! The engine itself is an external collaborator behind the
//! [`RecognitionEngine`] trait. The shipped [`CommandEngine`] delegates to a
//! user-configured recognizer program; tests drive the adapter with scripted
//! engines.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use std::future::Future;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};

/// Recognition languages supported by the task service deployment.
///
/// Fixed set; the configuration stores the code (`en-IN`, `hi-IN`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    EnIn,
    HiIn,
    BnIn,
    GuIn,
    KnIn,
    MlIn,
    MrIn,
    PaIn,
    TaIn,
    TeIn,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::EnIn,
        Language::HiIn,
        Language::BnIn,
        Language::GuIn,
        Language::KnIn,
        Language::MlIn,
        Language::MrIn,
        Language::PaIn,
        Language::TaIn,
        Language::TeIn,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::EnIn => "en-IN",
            Language::HiIn => "hi-IN",
            Language::BnIn => "bn-IN",
            Language::GuIn => "gu-IN",
            Language::KnIn => "kn-IN",
            Language::MlIn => "ml-IN",
            Language::MrIn => "mr-IN",
            Language::PaIn => "pa-IN",
            Language::TaIn => "ta-IN",
            Language::TeIn => "te-IN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::EnIn => "English (India)",
            Language::HiIn => "Hindi (India)",
            Language::BnIn => "Bengali (India)",
            Language::GuIn => "Gujarati (India)",
            Language::KnIn => "Kannada (India)",
            Language::MlIn => "Malayalam (India)",
            Language::MrIn => "Marathi (India)",
            Language::PaIn => "Punjabi (India)",
            Language::TaIn => "Tamil (India)",
            Language::TeIn => "Telugu (India)",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|language| language.code() == code)
    }
}

/// Events emitted by a recognition engine over one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The engine started listening.
    Started,
    /// Recognized speech; alternatives are ranked best-first.
    Result { alternatives: Vec<String> },
    /// Engine-reported failure with its error code.
    Error { code: String },
    /// The session ended. Always the last event.
    Ended,
}

/// Final result of one recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A non-empty transcript was captured and forwarded to the callback.
    Transcript(String),
    /// The session ended without transcript or error.
    NothingRecognized,
    /// The engine reported an error; any in-flight transcript was discarded.
    Failed { code: String },
}

/// Adapter phase over one session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Listening,
    Completing,
    Submitting,
}

/// A platform recognition capability: start a session and receive its events.
#[allow(async_fn_in_trait)]
pub trait RecognitionEngine {
    /// Begins a recognition session in the given language and returns its
    /// event stream. The stream must end with [`SessionEvent::Ended`].
    async fn start(&mut self, language: Language) -> Result<mpsc::Receiver<SessionEvent>>;

    /// Requests the current session to end. The `Ended` event still arrives
    /// asynchronously through the event stream.
    fn request_stop(&mut self);
}

/// Owned, explicitly constructed capture adapter. One instance per caller;
/// no shared recognition state.
pub struct SpeechCapture<E> {
    engine: E,
    language: Language,
    phase: Phase,
}

impl<E: RecognitionEngine> SpeechCapture<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            language: Language::default(),
            phase: Phase::Idle,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets the recognition language. Takes effect on the next session only;
    /// a session already running keeps the language it started with.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Requests the engine to end the current session. No-op unless the
    /// adapter is currently listening.
    pub fn stop(&mut self) {
        if self.phase == Phase::Listening {
            self.engine.request_stop();
        }
    }

    /// Runs one recognition session to completion.
    ///
    /// Captures the first alternative of the first result only. When the
    /// session ends with a non-empty transcript, `on_transcript` is invoked
    /// exactly once with the raw text; the adapter stays in the submitting
    /// phase until that future settles, then resets to idle. An engine error
    /// discards any in-flight transcript.
    ///
    /// Exclusive access through `&mut self` serializes sessions; the phase is
    /// back to idle on every exit path, so the adapter can always run another.
    pub async fn run_session<F, Fut>(&mut self, on_transcript: F) -> Result<SessionOutcome>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let mut events = self.engine.start(self.language).await?;
        let mut transcript: Option<String> = None;
        let mut error: Option<String> = None;

        // A closed channel counts as session end even without an explicit
        // Ended event, so a crashed engine cannot wedge the adapter.
        while let Some(event) = events.recv().await {
            msg_debug!(Message::DebugSessionEvent(format!("{:?}", event)));
            match event {
                SessionEvent::Started => {
                    self.phase = Phase::Listening;
                }
                SessionEvent::Result { alternatives } => {
                    if self.phase == Phase::Listening {
                        transcript = alternatives.into_iter().next();
                        self.phase = Phase::Completing;
                    }
                }
                SessionEvent::Error { code } => {
                    error = Some(code);
                    transcript = None;
                }
                SessionEvent::Ended => break,
            }
        }

        if let Some(code) = error {
            self.phase = Phase::Idle;
            return Ok(SessionOutcome::Failed { code });
        }

        let transcript = transcript.map(|text| text.trim().to_string()).filter(|text| !text.is_empty());
        let outcome = match transcript {
            Some(text) => {
                self.phase = Phase::Submitting;
                let submitted = on_transcript(text.clone()).await;
                self.phase = Phase::Idle;
                submitted?;
                SessionOutcome::Transcript(text)
            }
            None => SessionOutcome::NothingRecognized,
        };
        self.phase = Phase::Idle;
        Ok(outcome)
    }
}

/// Recognition engine that delegates to an external recognizer program.
///
/// The configured command line is split on whitespace; `{lang}` in any
/// argument is replaced with the session's language code. Each non-empty
/// stdout line is one ranked alternative, best first. A failing exit status
/// maps to an error event unless the session was stopped deliberately.
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
    stop: Option<oneshot::Sender<()>>,
}

impl CommandEngine {
    pub fn from_command_line(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| msg_error_anyhow!(Message::SpeechCommandEmpty))?.to_string();
        Ok(Self {
            program,
            args: parts.map(str::to_string).collect(),
            stop: None,
        })
    }
}

impl RecognitionEngine for CommandEngine {
    async fn start(&mut self, language: Language) -> Result<mpsc::Receiver<SessionEvent>> {
        let args: Vec<String> = self.args.iter().map(|arg| arg.replace("{lang}", language.code())).collect();
        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| msg_error_anyhow!(Message::SpeechEngineLaunchFailed(self.program.clone(), err.to_string())))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| msg_error_anyhow!(Message::SpeechEngineLaunchFailed(self.program.clone(), "no stdout".to_string())))?;

        let (tx, rx) = mpsc::channel(8);
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        self.stop = Some(stop_tx);

        tokio::spawn(async move {
            let _ = tx.send(SessionEvent::Started).await;

            let mut lines = BufReader::new(stdout).lines();
            let mut alternatives: Vec<String> = Vec::new();
            let mut stop_requested = false;
            loop {
                tokio::select! {
                    line = lines.next_line() => match line {
                        Ok(Some(line)) => {
                            let line = line.trim().to_string();
                            if !line.is_empty() {
                                alternatives.push(line);
                            }
                        }
                        _ => break,
                    },
                    _ = &mut stop_rx, if !stop_requested => {
                        stop_requested = true;
                        let _ = child.start_kill();
                    }
                }
            }

            if !alternatives.is_empty() {
                let _ = tx.send(SessionEvent::Result { alternatives }).await;
            }
            match child.wait().await {
                Ok(status) if !status.success() && !stop_requested => {
                    let code = status.code().map(|code| format!("exit status {}", code)).unwrap_or_else(|| "terminated".to_string());
                    let _ = tx.send(SessionEvent::Error { code }).await;
                }
                Err(err) => {
                    let _ = tx.send(SessionEvent::Error { code: err.to_string() }).await;
                }
                _ => {}
            }
            let _ = tx.send(SessionEvent::Ended).await;
        });

        Ok(rx)
    }

    fn request_stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}
