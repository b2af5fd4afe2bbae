//! Order summary page

use crate::menu::framework::page::navigation_entries;
use crate::menu::framework::{ContentArea, MenuEntry, Page, PageContext, PageResult};
use cupcake_order::Screen;

pub struct SummaryPage;

impl Page for SummaryPage {
    fn screen(&self) -> Screen {
        Screen::Summary
    }

    fn operation_hint(&self) -> &str {
        "Review your order"
    }

    fn content(&self, context: &PageContext) -> ContentArea {
        ContentArea::new().add_section("Order", context.controller.selection().describe())
    }

    fn entries(&self, context: &PageContext) -> Vec<MenuEntry> {
        let mut entries = navigation_entries(&context.controller);
        entries.push(MenuEntry::new("Exit", PageResult::Exit));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::pages::test_support::{context, labels, today};
    use cupcake_order::Flavor;

    #[test]
    fn test_summary_offers_no_next() {
        let mut context = context();
        context.controller.select_quantity(12);
        context.controller.select_flavor(Flavor::SaltedCaramel);
        context.controller.next();
        context.controller.select_date(today());
        context.controller.next();
        assert_eq!(context.controller.current_screen(), Screen::Summary);

        let entries = SummaryPage.entries(&context);
        assert_eq!(labels(&entries), vec!["Cancel", "← Back", "Exit"]);

        colored::control::set_override(false);
        let content = SummaryPage.content(&context);
        assert!(content.content.contains(&"  • Flavor: Salted Caramel".to_string()));
        assert!(content.content.contains(&"  • Quantity: 12 cupcakes".to_string()));
    }
}
