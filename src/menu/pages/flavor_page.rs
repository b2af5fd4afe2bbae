//! Flavor page

use crate::menu::framework::page::navigation_entries;
use crate::menu::framework::{ContentArea, MenuEntry, Page, PageContext};
use cupcake_order::{OrderAction, Screen};

pub struct FlavorPage;

impl Page for FlavorPage {
    fn screen(&self) -> Screen {
        Screen::Flavor
    }

    fn operation_hint(&self) -> &str {
        "Pick a flavor, then continue with Next"
    }

    fn content(&self, context: &PageContext) -> ContentArea {
        ContentArea::new().add_section("Your order", context.controller.selection().describe())
    }

    fn entries(&self, context: &PageContext) -> Vec<MenuEntry> {
        let chosen = context.controller.selection().flavor;
        let mut entries: Vec<MenuEntry> = context
            .controller
            .options()
            .flavors
            .iter()
            .map(|&flavor| {
                MenuEntry::action(
                    context.marked(flavor, chosen == Some(flavor)),
                    OrderAction::SelectFlavor(flavor),
                )
            })
            .collect();
        entries.extend(navigation_entries(&context.controller));
        entries
    }
}
