//! Menu framework module

pub mod components;
pub mod input;
pub mod layout;
pub mod page;
pub mod terminal;
pub mod theme;

pub use components::{Breadcrumb, ContentArea, Footer};
pub use input::{EnhancedSelect, SelectResult};
pub use layout::{Layout, LayoutComponents, StandardLayout};
pub use page::{MenuEntry, Page, PageContext, PageResult};
pub use theme::{DefaultTheme, Theme};
