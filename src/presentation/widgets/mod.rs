mod detail_list;
mod footer_bar;
mod header_bar;
mod input;
mod metric_card;
mod tab_bar;

pub use detail_list::DetailList;
pub use footer_bar::{FooterBar, ScreenContext};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use metric_card::{CARD_HEIGHT, MetricCardView, MetricGrid};
pub use tab_bar::{HomeTab, TabBar};
