//! Pickup date page

use crate::menu::framework::page::navigation_entries;
use crate::menu::framework::{ContentArea, MenuEntry, Page, PageContext};
use cupcake_order::{OrderAction, Screen, format_pickup_date};

pub struct PickupPage;

impl Page for PickupPage {
    fn screen(&self) -> Screen {
        Screen::Pickup
    }

    fn operation_hint(&self) -> &str {
        "Pick a pickup date, then continue with Next"
    }

    fn content(&self, context: &PageContext) -> ContentArea {
        ContentArea::new().add_section("Your order", context.controller.selection().describe())
    }

    fn entries(&self, context: &PageContext) -> Vec<MenuEntry> {
        let chosen = context.controller.selection().pickup_date;
        let mut entries: Vec<MenuEntry> = context
            .controller
            .options()
            .pickup_dates
            .iter()
            .map(|&date| {
                MenuEntry::action(
                    context.marked(format_pickup_date(date), chosen == Some(date)),
                    OrderAction::SelectDate(date),
                )
            })
            .collect();
        entries.extend(navigation_entries(&context.controller));
        entries
    }
}
