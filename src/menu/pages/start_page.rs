//! Start page: pick how many cupcakes

use crate::menu::framework::{MenuEntry, Page, PageContext, PageResult};
use cupcake_order::{OrderAction, Screen};

pub struct StartPage;

fn quantity_label(quantity: u32) -> String {
    match quantity {
        1 => "One Cupcake".to_string(),
        6 => "Six Cupcakes".to_string(),
        12 => "Twelve Cupcakes".to_string(),
        n => format!("{n} Cupcakes"),
    }
}

impl Page for StartPage {
    fn screen(&self) -> Screen {
        Screen::Start
    }

    fn operation_hint(&self) -> &str {
        "Order cupcakes"
    }

    fn entries(&self, context: &PageContext) -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = context
            .controller
            .options()
            .quantities
            .iter()
            .map(|&q| MenuEntry::action(quantity_label(q), OrderAction::SelectQuantity(q)))
            .collect();
        entries.push(MenuEntry::new("Exit", PageResult::Exit));
        entries
    }
}
