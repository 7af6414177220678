use crate::calendar::{CellStyler, MonthGrid, MonthPager, YearMonth};
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<S> {
    pager: MonthPager,
    styler: S,
    state: AppState,
}

impl<S: CellStyler> App<S> {
    pub(crate) fn new(pager: MonthPager, styler: S) -> App<S> {
        App {
            pager,
            styler,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('l' | 'j') | KeyCode::Right | KeyCode::Down | KeyCode::PageDown => {
                    self.next_month()
                }
                KeyCode::Char('h' | 'k') | KeyCode::Left | KeyCode::Up | KeyCode::PageUp => {
                    self.previous_month()
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    self.reset();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char('0') => state.handle_input(JumpToInput::Digit(0)),
                        KeyCode::Char('1') => state.handle_input(JumpToInput::Digit(1)),
                        KeyCode::Char('2') => state.handle_input(JumpToInput::Digit(2)),
                        KeyCode::Char('3') => state.handle_input(JumpToInput::Digit(3)),
                        KeyCode::Char('4') => state.handle_input(JumpToInput::Digit(4)),
                        KeyCode::Char('5') => state.handle_input(JumpToInput::Digit(5)),
                        KeyCode::Char('6') => state.handle_input(JumpToInput::Digit(6)),
                        KeyCode::Char('7') => state.handle_input(JumpToInput::Digit(7)),
                        KeyCode::Char('8') => state.handle_input(JumpToInput::Digit(8)),
                        KeyCode::Char('9') => state.handle_input(JumpToInput::Digit(9)),
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(month) => {
                            self.state = AppState::Calendar;
                            self.jump_to(month)
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn next_month(&mut self) -> bool {
        self.pager.one_month_forwards().is_ok()
    }

    fn previous_month(&mut self) -> bool {
        self.pager.one_month_backwards().is_ok()
    }

    fn reset(&mut self) {
        self.pager.jump_to_today();
    }

    fn jump_to(&mut self, month: YearMonth) -> bool {
        self.pager.jump_to_month(month).is_ok()
    }
}

impl<S: CellStyler> Widget for &mut App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        MonthGrid::new(&self.styler).render(area, buf, &mut self.pager);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{BASE_STYLE, OVERFLOW_STYLE, Shade, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE};
    use time::Month;

    fn sample_app() -> App<Shade> {
        let today = time::Date::from_calendar_date(2024, Month::February, 15).unwrap();
        App::new(MonthPager::new(today), Shade)
    }

    fn current_month(app: &mut App<Shade>) -> YearMonth {
        app.pager.current_page().unwrap().month()
    }

    #[test]
    fn test_render_month() {
        let mut app = sample_app();
        let area = Rect::new(0, 0, 80, 8);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                                 February 2024                                  ",
            "                           Mo  Tu  We  Th  Fr  Sa  Su                           ",
            "                          ────────────────────────────                          ",
            "                           29  30  31   1   2   3   4                           ",
            "                            5   6   7   8   9  10  11                           ",
            "                           12  13  14 [15] 16  17  18                           ",
            "                           19  20  21  22  23  24  25                           ",
            "                           26  27  28  29   1   2   3                           ",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(33, 0, 13, 1), TITLE_STYLE);
        expected.set_style(Rect::new(26, 1, 28, 1), WEEKDAY_STYLE);
        expected.set_style(Rect::new(26, 3, 12, 1), OVERFLOW_STYLE);
        expected.set_style(Rect::new(38, 5, 4, 1), TODAY_STYLE);
        expected.set_style(Rect::new(42, 7, 12, 1), OVERFLOW_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('l')));
        assert_eq!(
            current_month(&mut app),
            YearMonth {
                year: 2024,
                month: Month::March
            }
        );
        assert!(app.handle_key(KeyCode::Left));
        assert!(app.handle_key(KeyCode::Char('h')));
        assert_eq!(
            current_month(&mut app),
            YearMonth {
                year: 2024,
                month: Month::January
            }
        );
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(
            current_month(&mut app),
            YearMonth {
                year: 2024,
                month: Month::February
            }
        );
    }

    #[test]
    fn test_jump_entry() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('g')));
        for ch in "199912".chars() {
            assert!(app.handle_key(KeyCode::Char(ch)));
        }
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(
            current_month(&mut app),
            YearMonth {
                year: 1999,
                month: Month::December
            }
        );
    }

    #[test]
    fn test_help_dismisses_on_any_key() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_quit() {
        let mut app = sample_app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
    }
}
