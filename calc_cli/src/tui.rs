//! Keypad screen for terminals.
//!
//! Keys follow the calculator's keyboard bindings (digits, `.`, `+ - * /`,
//! Enter, Backspace) plus single-letter shortcuts for the buttons a keyboard
//! lacks. Esc quits.

use std::io;

use calc_core::operations::{BinaryOperator, TrigFunction};
use calc_core::{Calculator, Constant, Intent};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

/// Shortcut letters shown under the display
const HELP: [&str; 3] = [
    "0-9 .  + - * / ^   Enter =   Backspace   c clear   Esc/Ctrl+C quit",
    "s sqrt   x exp   i sin   o cos   t tan   r rad/deg",
    "p pi   e e",
];

/// Run the keypad screen until Esc is pressed.
pub fn run(calculator: Calculator) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = KeypadScreen::new(calculator).run(&mut terminal);
    ratatui::restore();
    result
}

struct KeypadScreen {
    calculator: Calculator,
    exit: bool,
}

impl KeypadScreen {
    fn new(calculator: Calculator) -> Self {
        KeypadScreen {
            calculator,
            exit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            // Raw mode swallows SIGINT, so Ctrl+C quits here
            if key.code == KeyCode::Char('c') {
                self.exit = true;
            }
            return;
        }
        if key.code == KeyCode::Esc {
            self.exit = true;
            return;
        }
        if let Some(intent) = intent_for_key(key.code) {
            let shown = self.calculator.apply(intent);
            tracing::debug!(?intent, %shown, "applied");
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [display_area, help_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(HELP.len() as u16),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let display = Paragraph::new(self.calculator.display())
            .alignment(Alignment::Right)
            .block(Block::bordered().title(format!(" {} ", self.calculator.angle_mode())));
        frame.render_widget(display, display_area);

        let help: Vec<Line> = HELP.iter().map(|line| Line::from(*line)).collect();
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        let status = self
            .calculator
            .last_error()
            .map(|e| e.to_string())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::Yellow)),
            status_area,
        );
    }
}

/// Map a key to an intent: keyboard bindings first, then shortcut letters.
fn intent_for_key(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Enter => Intent::from_key("Enter"),
        KeyCode::Backspace => Intent::from_key("Backspace"),
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            Intent::from_key(c.encode_utf8(&mut buf)).or_else(|| shortcut(c))
        }
        _ => None,
    }
}

fn shortcut(c: char) -> Option<Intent> {
    let intent = match c {
        '=' => Intent::Equals,
        '^' => Intent::Operator(BinaryOperator::Power),
        'c' => Intent::Clear,
        's' => Intent::Sqrt,
        'x' => Intent::Exp,
        'i' => Intent::Trig(TrigFunction::Sin),
        'o' => Intent::Trig(TrigFunction::Cos),
        't' => Intent::Trig(TrigFunction::Tan),
        'r' => Intent::ToggleMode,
        'p' => Intent::Constant(Constant::Pi),
        'e' => Intent::Constant(Constant::E),
        _ => return None,
    };
    Some(intent)
}
