//! Scripted game session for controller tests

use crate::core::Vocabulary;
use crate::game::GameSession;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct ScriptedExercise {
    task: String,
    answers: Vec<String>,
    correct_idx: usize,
    input: bool,
    spelling: String,
}

impl ScriptedExercise {
    pub fn choice(task: &str, answers: &[&str], correct_idx: usize) -> Self {
        Self {
            task: task.to_string(),
            answers: answers.iter().map(ToString::to_string).collect(),
            correct_idx,
            input: false,
            spelling: answers.get(correct_idx).map(ToString::to_string).unwrap_or_default(),
        }
    }

    pub fn input(task: &str, spelling: &str) -> Self {
        Self {
            task: task.to_string(),
            answers: Vec::new(),
            correct_idx: 0,
            input: true,
            spelling: spelling.to_string(),
        }
    }
}

/// Hands out queued exercises in order; `create_exercise` fails once the queue is empty
#[derive(Debug, Default)]
pub struct ScriptedSession {
    queue: VecDeque<ScriptedExercise>,
    current: Option<ScriptedExercise>,
    pub loads: usize,
    pub create_calls: usize,
    pub checked: Vec<usize>,
    pub checked_inputs: Vec<String>,
}

impl ScriptedSession {
    pub fn new(exercises: Vec<ScriptedExercise>) -> Self {
        Self {
            queue: exercises.into(),
            ..Self::default()
        }
    }
}

impl GameSession for ScriptedSession {
    fn load_words(&mut self, vocabulary: Vocabulary) -> usize {
        self.loads += 1;
        vocabulary.len()
    }

    fn create_exercise(&mut self) -> bool {
        self.create_calls += 1;
        match self.queue.pop_front() {
            Some(ex) => {
                self.current = Some(ex);
                true
            }
            None => false,
        }
    }

    fn task(&self) -> String {
        self.current.as_ref().map(|ex| ex.task.clone()).unwrap_or_default()
    }

    fn answers(&self) -> Vec<String> {
        self.current
            .as_ref()
            .map(|ex| ex.answers.clone())
            .unwrap_or_default()
    }

    fn check_answer(&mut self, index: usize) -> bool {
        self.checked.push(index);
        self.current
            .as_ref()
            .is_some_and(|ex| !ex.input && ex.correct_idx == index)
    }

    fn is_exercise_input(&self) -> bool {
        self.current.as_ref().is_some_and(|ex| ex.input)
    }

    fn check_answer_input(&mut self, text: &str) -> bool {
        self.checked_inputs.push(text.to_string());
        self.current
            .as_ref()
            .is_some_and(|ex| ex.input && ex.spelling.eq_ignore_ascii_case(text))
    }

    fn correct_spelling(&self) -> String {
        self.current
            .as_ref()
            .map(|ex| ex.spelling.clone())
            .unwrap_or_default()
    }

    fn correct_message(&self) -> String {
        "Correct!".to_string()
    }

    fn incorrect_message(&self) -> String {
        format!("Incorrect! The answer is {}", self.correct_spelling())
    }
}
