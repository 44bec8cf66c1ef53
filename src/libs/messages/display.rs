//! Display implementation for voxdo application messages.
//!
//! Single source of truth for all user-facing text. Messages are defined as
//! structured variants in [`Message`] and rendered here, so wording changes
//! never touch command or controller code.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' created", text),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskTextEmpty => "Task text must not be empty".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::NoTasksFound => "No tasks yet! Start by adding one.".to_string(),

            // === SPEECH MESSAGES ===
            Message::SpeechListening(language) => format!("Listening for speech in {}...", language),
            Message::SpeechNothingRecognized => "No speech was recognized. Please try again.".to_string(),
            Message::SpeechError(code) => format!("Speech recognition error: {}. Please check microphone access and try again.", code),
            Message::SpeechNotConfigured => "Speech recognition is not configured. Run 'voxdo init' and set up the speech module.".to_string(),
            Message::SpeechCommandEmpty => "Recognizer command is empty".to_string(),
            Message::SpeechEngineLaunchFailed(program, err) => format!("Failed to launch recognizer '{}': {}", program, err),
            Message::UnknownLanguage(code) => format!("Unknown recognition language '{}'", code),
            Message::VoiceTaskAdded(text) => format!("Task '{}' added from voice", text),
            Message::VoiceTaskFailed(detail) => format!("Error adding task from voice: {}", detail),
            Message::AudioTaskCreated => "Audio uploaded, task created from server-side transcription".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ServerNotConfigured => "Task service URL is not configured. Run 'voxdo init' or set VOXDO_API_URL.".to_string(),
            Message::PromptApiUrl => "Enter the task service base URL".to_string(),
            Message::PromptRecognizerCommand => "Recognizer command ({lang} is replaced with the language code)".to_string(),
            Message::PromptLanguage => "Recognition language".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfirmDeleteTask(id) => format!("Delete task {}?", id),

            // === DEBUG MESSAGES ===
            Message::DebugTasksRefreshed(count) => format!("Refreshed task collection: {} tasks", count),
            Message::DebugSessionEvent(event) => format!("Recognition session event: {}", event),
            Message::DebugRequest(method, url) => format!("{} {}", method, url),
            Message::DebugRemovalMarkerCleared(id) => format!("Removal marker cleared for task {}", id),
        };
        write!(f, "{}", text)
    }
}
