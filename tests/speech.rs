#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tokio::sync::mpsc;
    use voxdo::libs::speech::{Language, Phase, RecognitionEngine, SessionEvent, SessionOutcome, SpeechCapture};

    /// Engine that replays a fixed event script for every session and records
    /// how it was driven.
    struct ScriptedEngine {
        events: Vec<SessionEvent>,
        languages: Arc<Mutex<Vec<Language>>>,
        stops: Arc<Mutex<u32>>,
    }

    impl ScriptedEngine {
        fn new(events: Vec<SessionEvent>) -> Self {
            Self {
                events,
                languages: Arc::new(Mutex::new(Vec::new())),
                stops: Arc::new(Mutex::new(0)),
            }
        }
    }

    impl RecognitionEngine for ScriptedEngine {
        async fn start(&mut self, language: Language) -> anyhow::Result<mpsc::Receiver<SessionEvent>> {
            self.languages.lock().push(language);
            let (tx, rx) = mpsc::channel(8);
            let events = self.events.clone();
            tokio::spawn(async move {
                for event in events {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
            });
            Ok(rx)
        }

        fn request_stop(&mut self) {
            *self.stops.lock() += 1;
        }
    }

    fn result(alternatives: &[&str]) -> SessionEvent {
        SessionEvent::Result {
            alternatives: alternatives.iter().map(|text| text.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_transcript_forwarded_exactly_once() {
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, result(&["buy milk", "buy silk"]), SessionEvent::Ended]);
        let mut capture = SpeechCapture::new(engine);
        let submitted = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&submitted);
        let outcome = capture
            .run_session(move |text| async move {
                sink.lock().push(text);
                anyhow::Ok(())
            })
            .await
            .unwrap();

        assert_eq!(outcome, SessionOutcome::Transcript("buy milk".to_string()));
        assert_eq!(*submitted.lock(), vec!["buy milk".to_string()]);
        assert_eq!(capture.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_silent_session_surfaces_nothing_recognized() {
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, SessionEvent::Ended]);
        let mut capture = SpeechCapture::new(engine);
        let submitted = Arc::new(Mutex::new(Vec::<String>::new()));

        let sink = Arc::clone(&submitted);
        let outcome = capture
            .run_session(move |text| async move {
                sink.lock().push(text);
                anyhow::Ok(())
            })
            .await
            .unwrap();

        assert_eq!(outcome, SessionOutcome::NothingRecognized);
        assert!(submitted.lock().is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_transcript_counts_as_nothing() {
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, result(&["   "]), SessionEvent::Ended]);
        let mut capture = SpeechCapture::new(engine);

        let outcome = capture.run_session(|_| async { anyhow::Ok(()) }).await.unwrap();

        assert_eq!(outcome, SessionOutcome::NothingRecognized);
    }

    #[tokio::test]
    async fn test_engine_error_surfaces_code_without_callback() {
        let engine = ScriptedEngine::new(vec![
            SessionEvent::Started,
            SessionEvent::Error {
                code: "not-allowed".to_string(),
            },
            SessionEvent::Ended,
        ]);
        let mut capture = SpeechCapture::new(engine);
        let submitted = Arc::new(Mutex::new(Vec::<String>::new()));

        let sink = Arc::clone(&submitted);
        let outcome = capture
            .run_session(move |text| async move {
                sink.lock().push(text);
                anyhow::Ok(())
            })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Failed {
                code: "not-allowed".to_string()
            }
        );
        assert!(submitted.lock().is_empty());
    }

    #[tokio::test]
    async fn test_error_discards_in_flight_transcript() {
        let engine = ScriptedEngine::new(vec![
            SessionEvent::Started,
            result(&["buy milk"]),
            SessionEvent::Error {
                code: "network".to_string(),
            },
            SessionEvent::Ended,
        ]);
        let mut capture = SpeechCapture::new(engine);

        let outcome = capture.run_session(|_| async { anyhow::Ok(()) }).await.unwrap();

        assert_eq!(outcome, SessionOutcome::Failed { code: "network".to_string() });
    }

    #[tokio::test]
    async fn test_only_first_result_is_captured() {
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, result(&["first"]), result(&["second"]), SessionEvent::Ended]);
        let mut capture = SpeechCapture::new(engine);

        let outcome = capture.run_session(|_| async { anyhow::Ok(()) }).await.unwrap();

        assert_eq!(outcome, SessionOutcome::Transcript("first".to_string()));
    }

    #[tokio::test]
    async fn test_closed_channel_counts_as_session_end() {
        // No explicit Ended event; the script task dropping the sender ends
        // the session.
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, result(&["buy milk"])]);
        let mut capture = SpeechCapture::new(engine);

        let outcome = capture.run_session(|_| async { anyhow::Ok(()) }).await.unwrap();

        assert_eq!(outcome, SessionOutcome::Transcript("buy milk".to_string()));
    }

    #[tokio::test]
    async fn test_submit_failure_propagates_and_resets() {
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, result(&["buy milk"]), SessionEvent::Ended]);
        let mut capture = SpeechCapture::new(engine);

        let result = capture.run_session(|_| async { Err(anyhow!("service unavailable")) }).await;

        assert!(result.is_err());
        assert_eq!(capture.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_failed_session_leaves_adapter_runnable() {
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, result(&["buy milk"]), SessionEvent::Ended]);
        let mut capture = SpeechCapture::new(engine);

        // A rejected submission must not wedge the adapter in a non-idle
        // phase; the next session runs normally.
        let failed = capture.run_session(|_| async { Err(anyhow!("service unavailable")) }).await;
        assert!(failed.is_err());
        assert_eq!(capture.phase(), Phase::Idle);

        let outcome = capture.run_session(|_| async { anyhow::Ok(()) }).await.unwrap();
        assert_eq!(outcome, SessionOutcome::Transcript("buy milk".to_string()));
        assert_eq!(capture.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_language_applies_to_next_session() {
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, SessionEvent::Ended]);
        let languages = Arc::clone(&engine.languages);
        let mut capture = SpeechCapture::new(engine).with_language(Language::HiIn);

        capture.run_session(|_| async { anyhow::Ok(()) }).await.unwrap();
        capture.set_language(Language::TaIn);
        capture.run_session(|_| async { anyhow::Ok(()) }).await.unwrap();

        assert_eq!(*languages.lock(), vec![Language::HiIn, Language::TaIn]);
    }

    #[tokio::test]
    async fn test_stop_is_noop_while_idle() {
        let engine = ScriptedEngine::new(vec![SessionEvent::Started, SessionEvent::Ended]);
        let stops = Arc::clone(&engine.stops);
        let mut capture = SpeechCapture::new(engine);

        capture.stop();

        assert_eq!(*stops.lock(), 0);
        assert_eq!(capture.phase(), Phase::Idle);
    }

    #[test]
    fn test_language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("xx-XX"), None);
        assert_eq!(Language::default(), Language::EnIn);
    }
}
