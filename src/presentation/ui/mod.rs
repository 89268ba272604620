//! UI screens.

mod alert_popup;
mod app;
mod drawer;
mod login_screen;
mod main_screen;
mod utils;

pub use alert_popup::AlertPopup;
pub use app::{App, ThemeStore};
pub use drawer::{Drawer, DrawerItem};
pub use login_screen::{Document, LoginAction, LoginField, LoginScreen, LoginView};
pub use main_screen::{MainAction, MainScreen, MainView};
