// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{StubBackend, catalog};
use crate::messages::SOMETHING_WENT_WRONG;
use crate::{App, AppError, MenuKind};
use doghouse_menu::{Console, MenuError};
use std::collections::VecDeque;

/// Console that answers a few lines, then fails to read the terminal.
struct FailingConsole {
    input: VecDeque<&'static str>,
    output: Vec<String>,
}

impl FailingConsole {
    fn new(lines: &[&'static str]) -> Self {
        Self {
            input: lines.iter().copied().collect(),
            output: Vec::new(),
        }
    }
}

impl Console for FailingConsole {
    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String, MenuError> {
        self.input.pop_front().map(String::from).ok_or_else(|| {
            MenuError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "terminal went away",
            ))
        })
    }
}

#[test]
fn test_terminal_failure_terminates_session() {
    let mut app: App<StubBackend> = App::new(StubBackend::default(), catalog()).unwrap();
    let mut console: FailingConsole = FailingConsole::new(&["2"]);

    let result: Result<(), AppError> = app.run(&mut console);

    assert!(matches!(result, Err(AppError::Menu(MenuError::Io(_)))));
    assert_eq!(
        console.output.last().map(String::as_str),
        Some(SOMETHING_WENT_WRONG)
    );
    assert_eq!(app.session().current(), MenuKind::Login);
}

#[test]
fn test_terminal_failure_on_first_read() {
    let mut app: App<StubBackend> = App::new(StubBackend::default(), catalog()).unwrap();
    let mut console: FailingConsole = FailingConsole::new(&[]);

    let result: Result<(), AppError> = app.run(&mut console);

    assert!(result.is_err());
    assert_eq!(
        console
            .output
            .iter()
            .filter(|line| line.as_str() == SOMETHING_WENT_WRONG)
            .count(),
        1
    );
}
