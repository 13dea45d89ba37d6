//! Keypad (Center)
//!
//! Fixed grid of buttons. Each button carries the [`Intent`] it sends, so the
//! layout is the only place that knows which button maps to which action.

use calc_core::operations::{BinaryOperator, TrigFunction};
use calc_core::{Constant, Intent};
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length, Padding, Theme};

use crate::Message;

const KEYPAD: &[&[Intent]] = &[
    &[
        Intent::ToggleMode,
        Intent::Trig(TrigFunction::Sin),
        Intent::Trig(TrigFunction::Cos),
        Intent::Trig(TrigFunction::Tan),
    ],
    &[
        Intent::Constant(Constant::Pi),
        Intent::Constant(Constant::E),
        Intent::Sqrt,
        Intent::Exp,
    ],
    &[
        Intent::Clear,
        Intent::Backspace,
        Intent::Operator(BinaryOperator::Power),
        Intent::Operator(BinaryOperator::Divide),
    ],
    &[
        Intent::Digit('7'),
        Intent::Digit('8'),
        Intent::Digit('9'),
        Intent::Operator(BinaryOperator::Multiply),
    ],
    &[
        Intent::Digit('4'),
        Intent::Digit('5'),
        Intent::Digit('6'),
        Intent::Operator(BinaryOperator::Subtract),
    ],
    &[
        Intent::Digit('1'),
        Intent::Digit('2'),
        Intent::Digit('3'),
        Intent::Operator(BinaryOperator::Add),
    ],
    &[Intent::Digit('0'), Intent::DecimalPoint, Intent::Equals],
];

/// Render the keypad grid
pub fn view_keypad() -> Element<'static, Message> {
    let rows = KEYPAD.iter().map(|keys| -> Element<'static, Message> {
        let buttons = keys.iter().map(|intent| view_key(*intent));
        Row::with_children(buttons).spacing(6).into()
    });

    Column::with_children(rows).spacing(6).into()
}

fn view_key(intent: Intent) -> Element<'static, Message> {
    // Zero spans two columns
    let portion = if intent == Intent::Digit('0') { 2 } else { 1 };

    let style: fn(&Theme, button::Status) -> button::Style = match intent {
        Intent::Equals => button::success,
        Intent::Clear => button::danger,
        Intent::Operator(_) | Intent::Sqrt | Intent::Exp | Intent::Trig(_) => button::primary,
        _ => button::secondary,
    };

    button(container(text(caption(intent)).size(16)).center_x(Length::Fill))
        .on_press(Message::Pressed(intent))
        .padding(Padding::from([10, 0]))
        .width(Length::FillPortion(portion))
        .style(style)
        .into()
}

/// Text printed on a button
fn caption(intent: Intent) -> String {
    match intent {
        Intent::Clear => "C".to_string(),
        Intent::Backspace => "⌫".to_string(),
        Intent::Sqrt => "√".to_string(),
        Intent::Constant(Constant::Pi) => "π".to_string(),
        _ => intent.label(),
    }
}
