//! Vocabulary Quiz
//!
//! A German vocabulary trainer. An exercise flow controller drives one exercise at a time
//! through start, fetch, answer and next, on top of a word game that picks the words you
//! know least.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vocab_quiz::controller::{Controller, Event, InputCommit, Outcome};
//! use vocab_quiz::game::{GameConfig, WordsGame};
//! use vocab_quiz::wordlists::{EmbeddedSource, WordSource};
//!
//! let mut controller = Controller::new(WordsGame::create(&GameConfig::default()), InputCommit::Submit);
//!
//! // Start asks the front end to fetch words; deliver the result back
//! if let Outcome::Fetch = controller.handle(Event::Start) {
//!     let _ = controller.handle(Event::FetchSettled(EmbeddedSource.fetch()));
//! }
//! println!("{}", controller.screen().task_label);
//! ```

// Core domain types
pub mod core;

// Word game engine
pub mod game;

// Exercise flow state machine
pub mod controller;

// Word sources
pub mod wordlists;

// Runtime configuration
pub mod config;

// Diagnostics
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
