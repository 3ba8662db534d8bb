//! Key bindings.
//!
//! | Key | View         | Action                      |
//! |-----|--------------|-----------------------------|
//! | a   | Table, Chart | show entry form             |
//! | r   | Table        | delete selected row         |
//! | p   | Table, Chart | show plots (total first)    |
//! | s   | Table, Chart | save to file                |
//! | e   | Table, Chart | exit                        |
//! | d   | Table, Chart | toggle dark / light         |
//!
//! In the form every printable key is text, so save and the colour toggle
//! move to Ctrl-S and Ctrl-D there. Ctrl-C exits from anywhere.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use when_core::{Event, Metric, View};

/// Maps a key press to an [`Event`] for the current view. `None` for unbound keys.
pub fn map_key(view: View, key: KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Exit),
            KeyCode::Char('s') => Some(Event::Save),
            KeyCode::Char('d') => Some(Event::ToggleDarkMode),
            _ => None,
        };
    }

    match view {
        View::Form => map_form_key(key),
        View::Table => map_common_key(key).or_else(|| map_table_key(key)),
        View::Chart => map_common_key(key).or_else(|| map_chart_key(key)),
    }
}

fn map_common_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char('a') => Some(Event::AddEntry),
        KeyCode::Char('p') => Some(Event::ShowPlots),
        KeyCode::Char('s') => Some(Event::Save),
        KeyCode::Char('e') => Some(Event::Exit),
        KeyCode::Char('d') => Some(Event::ToggleDarkMode),
        _ => None,
    }
}

fn map_table_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Delete => Some(Event::RemoveRow),
        KeyCode::Up | KeyCode::Char('k') => Some(Event::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Event::SelectDown),
        KeyCode::PageUp => Some(Event::PageUp),
        KeyCode::PageDown => Some(Event::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Event::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(Event::SelectLast),
        _ => None,
    }
}

fn map_chart_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char('1') => Some(Event::SelectMetric(Metric::Total)),
        KeyCode::Char('2') => Some(Event::SelectMetric(Metric::Alertness)),
        KeyCode::Char('3') => Some(Event::SelectMetric(Metric::Energy)),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Event::NextMetric),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Event::PrevMetric),
        KeyCode::Esc | KeyCode::Char('b') => Some(Event::Back),
        _ => None,
    }
}

fn map_form_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Enter => Some(Event::Submit),
        KeyCode::Esc => Some(Event::Back),
        KeyCode::Tab | KeyCode::Down => Some(Event::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Event::PrevField),
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => Some(Event::Input(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn table_bindings() {
        let cases = [
            ('a', Event::AddEntry),
            ('r', Event::RemoveRow),
            ('p', Event::ShowPlots),
            ('s', Event::Save),
            ('e', Event::Exit),
            ('d', Event::ToggleDarkMode),
        ];
        for (c, expected) in cases {
            assert_eq!(map_key(View::Table, key(KeyCode::Char(c))), Some(expected));
        }
    }

    #[test]
    fn remove_is_not_bound_on_chart() {
        assert_eq!(map_key(View::Chart, key(KeyCode::Char('r'))), None);
        assert_eq!(
            map_key(View::Chart, key(KeyCode::Char('s'))),
            Some(Event::Save)
        );
    }

    #[test]
    fn form_letters_are_text() {
        for c in ['a', 'r', 'p', 's', 'e', 'd'] {
            assert_eq!(
                map_key(View::Form, key(KeyCode::Char(c))),
                Some(Event::Input(c))
            );
        }
        assert_eq!(map_key(View::Form, key(KeyCode::Enter)), Some(Event::Submit));
        assert_eq!(map_key(View::Form, key(KeyCode::Esc)), Some(Event::Back));
    }

    #[test]
    fn control_chords_work_everywhere() {
        for view in [View::Table, View::Form, View::Chart] {
            assert_eq!(map_key(view, ctrl('c')), Some(Event::Exit));
            assert_eq!(map_key(view, ctrl('s')), Some(Event::Save));
            assert_eq!(map_key(view, ctrl('d')), Some(Event::ToggleDarkMode));
        }
    }

    #[test]
    fn chart_tabs() {
        assert_eq!(
            map_key(View::Chart, key(KeyCode::Char('3'))),
            Some(Event::SelectMetric(Metric::Energy))
        );
        assert_eq!(map_key(View::Chart, key(KeyCode::Tab)), Some(Event::NextMetric));
        assert_eq!(map_key(View::Chart, key(KeyCode::Esc)), Some(Event::Back));
    }

    #[test]
    fn table_navigation() {
        assert_eq!(map_key(View::Table, key(KeyCode::Down)), Some(Event::SelectDown));
        assert_eq!(map_key(View::Table, key(KeyCode::Char('k'))), Some(Event::SelectUp));
        assert_eq!(map_key(View::Table, key(KeyCode::End)), Some(Event::SelectLast));
        assert_eq!(map_key(View::Table, key(KeyCode::F(1))), None);
    }
}
