//! Application class driving the order menu

use super::framework::{PageContext, PageResult};
use super::pages::page_for;
use anyhow::Result;
use cupcake_order::{OrderNavigationController, Outcome};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Main application class
pub struct MenuApplication {
    context: PageContext,
    interrupted: Arc<AtomicBool>,
}

impl MenuApplication {
    /// Create a menu around an already constructed controller
    pub fn new(
        controller: OrderNavigationController,
        debug: bool,
        interrupted: Arc<AtomicBool>,
    ) -> Self {
        Self {
            context: PageContext::new(controller, debug, interrupted.clone()),
            interrupted,
        }
    }

    pub fn controller(&self) -> &OrderNavigationController {
        &self.context.controller
    }

    /// Run the application until the user exits
    pub fn run(&mut self) -> Result<()> {
        info!(route = self.context.controller.route_name(), "order menu started");

        loop {
            let mut page = page_for(self.context.controller.current_screen());
            let result = page.render(&mut self.context)?;

            let flow = if self.interrupted.swap(false, Ordering::SeqCst) {
                self.handle_interrupt()
            } else {
                self.handle_result(result)
            };

            if flow.is_break() {
                break;
            }
        }

        info!(route = self.context.controller.route_name(), "order menu closed");
        Ok(())
    }

    /// Ctrl+C: leave from Start, otherwise abandon the order
    fn handle_interrupt(&mut self) -> ControlFlow<()> {
        if self.context.controller.current_screen().is_root() {
            println!("\n👋 Goodbye!\n");
            ControlFlow::Break(())
        } else {
            println!("\n🔙 Order cancelled, returning to start...");
            self.context.controller.cancel();
            ControlFlow::Continue(())
        }
    }

    fn handle_result(&mut self, result: PageResult) -> ControlFlow<()> {
        match result {
            PageResult::Dispatch(action) => {
                if let Outcome::Ignored { reason } = self.context.controller.apply(action) {
                    debug!(%action, %reason, "menu action ignored");
                    if self.context.debug {
                        println!("DEBUG: {reason}");
                    }
                }
                ControlFlow::Continue(())
            }
            PageResult::Exit => {
                println!("👋 Thank you for ordering!\n");
                ControlFlow::Break(())
            }
            PageResult::Stay => ControlFlow::Continue(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cupcake_order::{Flavor, OrderAction, OrderOptions, Screen};

    fn app() -> MenuApplication {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let controller = OrderNavigationController::new(OrderOptions::starting(today));
        MenuApplication::new(controller, false, Arc::new(AtomicBool::new(false)))
    }

    #[test]
    fn test_dispatch_moves_controller() {
        let mut app = app();
        let flow = app.handle_result(PageResult::Dispatch(OrderAction::SelectQuantity(1)));
        assert!(flow.is_continue());
        assert_eq!(app.controller().current_screen(), Screen::Flavor);

        app.handle_result(PageResult::Dispatch(OrderAction::Next));
        assert_eq!(app.controller().current_screen(), Screen::Flavor);
    }

    #[test]
    fn test_exit_breaks_loop() {
        let mut app = app();
        assert!(app.handle_result(PageResult::Exit).is_break());
        assert!(app.handle_result(PageResult::Stay).is_continue());
    }

    #[test]
    fn test_interrupt_cancels_order_then_exits() {
        let mut app = app();
        app.handle_result(PageResult::Dispatch(OrderAction::SelectQuantity(6)));
        app.handle_result(PageResult::Dispatch(OrderAction::SelectFlavor(
            Flavor::Chocolate,
        )));
        app.handle_result(PageResult::Dispatch(OrderAction::Next));
        assert_eq!(app.controller().current_screen(), Screen::Pickup);

        assert!(app.handle_interrupt().is_continue());
        let controller = app.controller();
        assert_eq!(controller.current_screen(), Screen::Start);
        assert!(controller.back_stack().as_slice().is_empty());
        assert!(controller.selection().is_empty());

        assert!(app.handle_interrupt().is_break());
        assert_eq!(app.controller().route_name(), "Start");
    }
}
