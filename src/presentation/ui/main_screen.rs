//! Tab container shown after login.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::drawer::{Drawer, DrawerItem};
use crate::domain::entities::{Dashboard, Session};
use crate::domain::keybinding::{Action, Keybind, drawer_keybinds, home_keybinds, resolve};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    DetailList, HeaderBar, HeaderBarStyle, HomeTab, MetricGrid, ScreenContext, TabBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    None,
    ToggleTheme,
    SignOut,
    Quit,
}

/// Signed-in state: selected tab, detail selection and drawer.
pub struct MainScreen {
    session: Session,
    masked_phone: String,
    dashboard: Dashboard,
    tab: HomeTab,
    selected_detail: usize,
    drawer: Option<DrawerItem>,
    home_keybinds: Vec<Keybind>,
    drawer_keybinds: Vec<Keybind>,
}

impl MainScreen {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let masked_phone = session.phone_number().masked();
        Self {
            session,
            masked_phone,
            dashboard: Dashboard::sample(),
            tab: HomeTab::default(),
            selected_detail: 0,
            drawer: None,
            home_keybinds: home_keybinds(),
            drawer_keybinds: drawer_keybinds(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn tab(&self) -> HomeTab {
        self.tab
    }

    #[must_use]
    pub const fn selected_detail(&self) -> usize {
        self.selected_detail
    }

    #[must_use]
    pub const fn is_drawer_open(&self) -> bool {
        self.drawer.is_some()
    }

    #[must_use]
    pub const fn context(&self) -> ScreenContext {
        if self.drawer.is_some() {
            ScreenContext::Drawer
        } else {
            ScreenContext::Home
        }
    }

    #[must_use]
    pub fn keybinds(&self) -> &[Keybind] {
        if self.drawer.is_some() {
            &self.drawer_keybinds
        } else {
            &self.home_keybinds
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> MainAction {
        match self.drawer {
            Some(item) => self.handle_drawer_key(item, key),
            None => self.handle_home_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> MainAction {
        let Some(action) = resolve(&self.home_keybinds, &key) else {
            return MainAction::None;
        };

        match action {
            Action::ToggleDrawer => self.drawer = Some(DrawerItem::default()),
            Action::NextTab => self.tab = self.tab.next(),
            Action::PreviousTab => self.tab = self.tab.previous(),
            Action::SelectTab(index) => {
                if let Some(tab) = HomeTab::from_index(index) {
                    self.tab = tab;
                }
            }
            Action::NavigateDown if self.tab == HomeTab::Home => {
                let last = self.dashboard.details.len().saturating_sub(1);
                self.selected_detail = (self.selected_detail + 1).min(last);
            }
            Action::NavigateUp if self.tab == HomeTab::Home => {
                self.selected_detail = self.selected_detail.saturating_sub(1);
            }
            Action::Quit => return MainAction::Quit,
            _ => {}
        }
        MainAction::None
    }

    fn handle_drawer_key(&mut self, item: DrawerItem, key: KeyEvent) -> MainAction {
        let Some(action) = resolve(&self.drawer_keybinds, &key) else {
            return MainAction::None;
        };

        match action {
            Action::NavigateDown => self.drawer = Some(item.next()),
            Action::NavigateUp => self.drawer = Some(item.previous()),
            Action::ToggleTheme => return MainAction::ToggleTheme,
            Action::Select => {
                return match item {
                    DrawerItem::DarkTheme => MainAction::ToggleTheme,
                    DrawerItem::SignOut => {
                        self.drawer = None;
                        MainAction::SignOut
                    }
                };
            }
            Action::Cancel | Action::ToggleDrawer => self.drawer = None,
            Action::Quit => return MainAction::Quit,
            _ => {}
        }
        MainAction::None
    }
}

/// Renders a [`MainScreen`].
pub struct MainView<'a> {
    screen: &'a MainScreen,
    theme: &'a Theme,
}

impl<'a> MainView<'a> {
    #[must_use]
    pub const fn new(screen: &'a MainScreen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }

    fn section_title(&self, title: &'static str) -> Paragraph<'static> {
        Paragraph::new(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .style(self.theme.base_style)
    }

    fn render_home(&self, area: Rect, buf: &mut Buffer) {
        let dashboard = &self.screen.dashboard;
        let grid = MetricGrid::new(&dashboard.metrics, self.theme);

        let [_, metrics_title, metrics, _, details_title, details] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(grid.required_height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .horizontal_margin(1)
        .areas(area);

        self.section_title("Core metrics").render(metrics_title, buf);
        grid.render(metrics, buf);
        self.section_title("Details").render(details_title, buf);
        DetailList::new(&dashboard.details, self.theme)
            .selected(Some(self.screen.selected_detail))
            .render(details, buf);
    }

    fn render_placeholder(&self, tab: HomeTab, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(format!("{} page", tab.title())))
            .alignment(Alignment::Center)
            .style(self.theme.dimmed_style)
            .render(center, buf);
    }
}

impl Widget for MainView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base_style);

        let [header, body, tabs] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let tab = self.screen.tab;
        HeaderBar::new(tab.title())
            .account(Some(&self.screen.masked_phone))
            .menu_open(self.screen.is_drawer_open())
            .style(HeaderBarStyle::from_theme(self.theme))
            .render(header, buf);

        match tab {
            HomeTab::Home => self.render_home(body, buf),
            HomeTab::Data | HomeTab::Statistics => self.render_placeholder(tab, body, buf),
        }

        TabBar::new(tab, self.theme).render(tabs, buf);

        if let Some(item) = self.screen.drawer {
            Drawer::new(&self.screen.masked_phone, item, self.theme).render(body, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PhoneNumber;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> MainScreen {
        let phone = PhoneNumber::new("13521032797").expect("valid phone");
        MainScreen::new(Session::new(phone))
    }

    #[test]
    fn test_tab_switching() {
        let mut screen = screen();
        assert_eq!(screen.tab(), HomeTab::Home);

        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.tab(), HomeTab::Data);

        screen.handle_key(key(KeyCode::Char('3')));
        assert_eq!(screen.tab(), HomeTab::Statistics);

        screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(screen.tab(), HomeTab::Data);
    }

    #[test]
    fn test_detail_selection_is_clamped() {
        let mut screen = screen();
        for _ in 0..5 {
            screen.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(screen.selected_detail(), 2);

        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.selected_detail(), 1);
    }

    #[test]
    fn test_drawer_sign_out() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('m')));
        assert!(screen.is_drawer_open());
        assert_eq!(screen.context(), ScreenContext::Drawer);

        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), MainAction::SignOut);
        assert!(!screen.is_drawer_open());
    }

    #[test]
    fn test_drawer_theme_toggle_and_close() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('m')));

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), MainAction::ToggleTheme);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('d'))),
            MainAction::ToggleTheme
        );

        screen.handle_key(key(KeyCode::Esc));
        assert!(!screen.is_drawer_open());
    }

    #[test]
    fn test_drawer_swallows_tab_keys() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('m')));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.tab(), HomeTab::Home);
    }

    #[test]
    fn test_render_home() {
        let screen = screen();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);

        MainView::new(&screen, &theme).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Core metrics"));
        assert!(text.contains("8911.07"));
        assert!(text.contains("Details"));
        assert!(text.contains("Statistics"));
        assert!(text.contains("135****2797"));
    }
}
