#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),   // text
    TaskUpdated(i64),      // id
    TaskDeleted(i64),      // id
    TaskTextEmpty,
    TaskNotFoundWithId(i64),
    NoTasksFound,

    // === SPEECH MESSAGES ===
    SpeechListening(String), // language label
    SpeechNothingRecognized,
    SpeechError(String), // engine error code
    SpeechNotConfigured,
    SpeechCommandEmpty,
    SpeechEngineLaunchFailed(String, String), // program, error
    UnknownLanguage(String),
    VoiceTaskAdded(String),  // transcript
    VoiceTaskFailed(String), // error detail
    AudioTaskCreated,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ServerNotConfigured,
    PromptApiUrl,
    PromptRecognizerCommand,
    PromptLanguage,
    PromptSelectModules,
    ConfirmDeleteTask(i64),

    // === DEBUG MESSAGES ===
    DebugTasksRefreshed(usize),                 // count
    DebugSessionEvent(String),                  // event description
    DebugRequest(String, String),               // method, url
    DebugRemovalMarkerCleared(i64),             // id
}
