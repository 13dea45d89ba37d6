//! # Calculator GUI Application
//!
//! Button-pad calculator built with the Iced framework (Windows, macOS, Linux, WASM).
//!
//! The application is a thin adapter: button presses and key presses become
//! [`Intent`]s, the [`Calculator`] engine applies them, and the view renders
//! whatever display text the engine holds.
//!
//! Set `RUST_LOG=calc_core=debug` to trace every transition.

mod ui;

use calc_core::{Calculator, Intent};
use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, rule};
use iced::{window, Element, Length, Subscription, Theme};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub enum Message {
    /// A keypad button or bound key was pressed
    Pressed(Intent),
    ToggleDarkMode,
}

pub struct App {
    calculator: Calculator,
    dark_mode: bool,
}

impl App {
    fn new() -> Self {
        App {
            calculator: Calculator::new(),
            dark_mode: false,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Pressed(intent) => {
                let shown = self.calculator.apply(intent);
                tracing::debug!(?intent, %shown, "applied");
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::display::view_display(self.calculator.display(), self.calculator.angle_mode()),
            rule::horizontal(1),
            ui::keypad::view_keypad(),
            ui::status_bar::view_status_bar(
                self.calculator.angle_mode(),
                self.calculator.last_error(),
                self.dark_mode,
            ),
        ]
        .spacing(8);

        container(content)
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(handle_event)
    }
}

/// Translate unhandled key presses into intents
fn handle_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if matches!(status, event::Status::Captured) {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            key_name(&key).and_then(Intent::from_key).map(Message::Pressed)
        }
        _ => None,
    }
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(Named::Enter) => Some("Enter"),
        Key::Named(Named::Backspace) => Some("Backspace"),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    init_tracing();

    iced::application(App::new, App::update, App::view)
        .title("Calculator")
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((360.0, 520.0))
        .run()
}
