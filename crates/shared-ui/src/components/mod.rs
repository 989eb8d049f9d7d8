// Layout and content
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod page_header;
pub mod pagination;
pub mod skeleton;
pub mod stat_card;
pub mod state_panel;

// Forms
pub mod checkbox;
pub mod form;
pub mod form_select;
pub mod input;
pub mod textarea;

// Overlays and navigation
pub mod alert_dialog;
pub mod avatar;
pub mod dropdown_menu;
pub mod sidebar;
pub mod toast;

pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use data_table::*;
pub use detail_list::*;
pub use dropdown_menu::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_card::*;
pub use state_panel::*;
pub use textarea::*;
pub use toast::*;
