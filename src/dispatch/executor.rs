//! Command executor trait and the simulated implementation.

use chrono::Local;

use crate::error::Result;

/// Trait for executors that carry out a recognized intent.
///
/// Implementations map an intent label to an action and return the response
/// to speak. The label arrives as an opaque string matched exactly against
/// the intents the executor knows; unrecognized labels get a polite fallback
/// rather than an error.
pub trait CommandExecutor: Send + Sync {
    /// Carry out the action for an intent and return the spoken response.
    ///
    /// `utterance` is the raw user input, available for responses that want
    /// to echo part of it.
    fn execute(&self, intent: &str, utterance: &str) -> Result<String>;

    /// Deliver a response to the user.
    fn speak(&self, text: &str);

    /// Get the name of this executor (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// An executor that simulates every action instead of touching the OS.
///
/// Actions are logged and answered with the response a desktop executor
/// would speak. Useful on platforms without native integration and in tests.
#[derive(Clone, Debug, Default)]
pub struct SimulatedExecutor;

impl SimulatedExecutor {
    /// Create a new simulated executor.
    pub fn new() -> Self {
        SimulatedExecutor
    }
}

impl CommandExecutor for SimulatedExecutor {
    fn execute(&self, intent: &str, utterance: &str) -> Result<String> {
        log::debug!("simulating intent {intent:?} for utterance {utterance:?}");

        let response = match intent {
            "greeting" => "Hello! How can I help you?".to_string(),
            "farewell" => "Goodbye! Talk to you soon.".to_string(),
            "open_browser" => {
                log::info!("simulated action: launch the default web browser");
                "Opening your browser.".to_string()
            }
            "get_time" => {
                let now = Local::now();
                format!(
                    "It's {} on {}.",
                    now.format("%I:%M %p"),
                    now.format("%A, %B %d")
                )
            }
            "search" => {
                log::info!("simulated action: open a web search");
                "Searching the web for that.".to_string()
            }
            "play_music" => {
                log::info!("simulated action: start music playback");
                "Playing some music.".to_string()
            }
            "volume_up" => {
                log::info!("simulated action: raise system volume");
                "Volume increased.".to_string()
            }
            "volume_down" => {
                log::info!("simulated action: lower system volume");
                "Volume decreased.".to_string()
            }
            "volume_mute" => {
                log::info!("simulated action: mute system volume");
                "Volume muted.".to_string()
            }
            "shutdown" => "Shutting down. Goodbye!".to_string(),
            other => format!("I recognized {other}, but I don't have an action for it yet."),
        };

        Ok(response)
    }

    fn speak(&self, text: &str) {
        println!("[vesper] {text}");
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
