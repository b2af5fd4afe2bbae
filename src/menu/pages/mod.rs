//! Concrete page implementations, one per order screen

pub mod flavor_page;
pub mod pickup_page;
pub mod start_page;
pub mod summary_page;

pub use flavor_page::FlavorPage;
pub use pickup_page::PickupPage;
pub use start_page::StartPage;
pub use summary_page::SummaryPage;

use crate::menu::framework::Page;
use cupcake_order::Screen;

/// The page presenting `screen`
pub fn page_for(screen: Screen) -> Box<dyn Page> {
    match screen {
        Screen::Start => Box::new(StartPage),
        Screen::Flavor => Box::new(FlavorPage),
        Screen::Pickup => Box::new(PickupPage),
        Screen::Summary => Box::new(SummaryPage),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::menu::framework::PageContext;
    use chrono::NaiveDate;
    use cupcake_order::{OrderNavigationController, OrderOptions};
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    pub fn context() -> PageContext {
        let controller = OrderNavigationController::new(OrderOptions::starting(today()));
        PageContext::new(controller, false, Arc::new(AtomicBool::new(false)))
    }

    pub fn labels(entries: &[crate::menu::framework::MenuEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }
}
