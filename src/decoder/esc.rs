//! `ESC` sub-command handlers.
//!
//! None of these produce reply bytes.

use super::dual_encoded;
use crate::error::DecodeError;
use crate::printer::{
    ConfigUpdate, DrawerPin, Font, Justification, Magnification, PrintColor, Printer,
};
use crate::protocol::ByteCursor;
use crate::protocol::commands::{ESC, EscCommand};

/// Function code accepted by `ESC ( A`
const BUZZER_FUNCTION: u8 = 48;

/// Largest parameter block `ESC ( A` may declare
const BUZZER_MAX_PARAMS: usize = 4;

pub(super) fn handle<P: Printer + ?Sized>(
    printer: &mut P,
    cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
    let opcode = cursor.read_one_or_fail()?;
    let command = EscCommand::from_byte(opcode).ok_or(DecodeError::UnsupportedCommand {
        prefix: Some(ESC),
        opcode,
    })?;
    tracing::debug!(?command, "ESC");

    match command {
        EscCommand::Initialize => printer.reset(),
        EscCommand::SelectPrintMode => select_print_mode(printer, cursor.read_one_or_fail()?),
        EscCommand::SelectPrintColor => {
            let n = cursor.read_one_or_fail()?;
            let color = match dual_encoded(n, 2) {
                Some(0) => PrintColor::Black,
                Some(_) => PrintColor::Red,
                None => return Err(invalid("print color", n)),
            };
            printer.update_config(ConfigUpdate::Color(color));
        }
        EscCommand::SelectJustification => {
            let n = cursor.read_one_or_fail()?;
            let justification = match dual_encoded(n, 3) {
                Some(0) => Justification::Left,
                Some(1) => Justification::Center,
                Some(_) => Justification::Right,
                None => return Err(invalid("justification", n)),
            };
            printer.update_config(ConfigUpdate::Justification(justification));
        }
        EscCommand::SelectCharacterFont => {
            let n = cursor.read_one_or_fail()?;
            let font = character_font(n).ok_or_else(|| invalid("character font", n))?;
            printer.update_config(ConfigUpdate::Font(font));
        }
        EscCommand::EmphasisMode => {
            let n = cursor.read_one_or_fail()?;
            if n > 1 {
                return Err(invalid("emphasis mode", n));
            }
            printer.update_config(ConfigUpdate::Bold(n == 1));
        }
        EscCommand::Buzzer => buzzer(printer, cursor)?,
        EscCommand::UndocumentedBuzzer => {
            // n beeps of (t * 100) ms each
            let [n, t] = cursor.take_array::<2>()?;
            printer.beep(t, n, u16::from(t) * 2);
        }
        EscCommand::GeneratePulse => generate_pulse(printer, cursor)?,
    }

    Ok(())
}

fn invalid(command: &'static str, value: u8) -> DecodeError {
    DecodeError::InvalidArgument {
        command,
        value: usize::from(value),
    }
}

/// `ESC ! n`
///
/// | Bit | Meaning |
/// |-----|---------|
/// | 0 | Font 2 (else Font 1) |
/// | 3 | Emphasized |
/// | 4 | Double height |
/// | 5 | Double width |
/// | 7 | Underline |
fn select_print_mode<P: Printer + ?Sized>(printer: &mut P, n: u8) {
    let font = if n & 0x01 == 0 { Font::Font1 } else { Font::Font2 };
    let double = |set: bool| if set { Magnification::TWO } else { Magnification::ONE };

    printer.update_config(ConfigUpdate::Font(font));
    printer.update_config(ConfigUpdate::Bold(n & 0x08 != 0));
    printer.update_config(ConfigUpdate::Underline(n & 0x80 != 0));
    printer.update_config(ConfigUpdate::WidthMagnification(double(n & 0x20 != 0)));
    printer.update_config(ConfigUpdate::HeightMagnification(double(n & 0x10 != 0)));
}

/// `ESC M n`
fn character_font(n: u8) -> Option<Font> {
    match n {
        0x61 => return Some(Font::SpecialFontA),
        0x62 => return Some(Font::SpecialFontB),
        _ => {}
    }
    Some(match dual_encoded(n, 5)? {
        0 => Font::FontA,
        1 => Font::FontB,
        2 => Font::FontC,
        3 => Font::FontD,
        _ => Font::FontE,
    })
}

/// `ESC ( A pL pH fn n c t`
fn buzzer<P: Printer + ?Sized>(
    printer: &mut P,
    cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
    cursor.read_one_or_fail()?;
    let [p_l, p_h] = cursor.take_array::<2>()?;
    let len = usize::from(p_l) + usize::from(p_h) * 256;

    if len > BUZZER_MAX_PARAMS {
        return Err(DecodeError::UnsupportedFunction {
            command: "Buzzer parameter length",
            value: len,
        });
    }

    let params = cursor.take_n(len)?;
    if params.len() < len {
        return Err(DecodeError::EndOfStream {
            position: cursor.offset(),
        });
    }

    let param = |index: usize| params.get(index).copied().unwrap_or_default();
    let function = param(0);
    if function != BUZZER_FUNCTION {
        return Err(DecodeError::UnsupportedFunction {
            command: "Buzzer",
            value: usize::from(function),
        });
    }

    printer.beep(param(1), param(2), u16::from(param(3)));
    Ok(())
}

/// `ESC p m t1 t2`
///
/// ON time is `t1 * 2` ms, OFF time is `t2 * 2` ms. If `t2 < t1` the OFF
/// time equals the ON time.
fn generate_pulse<P: Printer + ?Sized>(
    printer: &mut P,
    cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
    let [m, t1, t2] = cursor.take_array::<3>()?;

    let pin = match dual_encoded(m, 2) {
        Some(0) => DrawerPin::Pin2,
        Some(_) => DrawerPin::Pin5,
        None => return Err(invalid("generate pulse", m)),
    };

    let on_time = u16::from(t1) * 2;
    let off_time = u16::from(t1.max(t2)) * 2;
    printer.drawer_kick_out(pin, on_time, off_time);
    Ok(())
}
