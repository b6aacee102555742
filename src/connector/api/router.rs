use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{EnhanceController, InteractiveController, ServeController};

pub struct Router<'a> {
    enhance_controller: EnhanceController<'a>,
    interactive_controller: InteractiveController<'a>,
    serve_controller: ServeController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            enhance_controller: EnhanceController::new(container),
            interactive_controller: InteractiveController::new(container),
            serve_controller: ServeController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Enhance { prompt, mode, save } => {
                self.enhance_controller.enhance(prompt, mode, save).await
            }
            Commands::Interactive => self.interactive_controller.run().await,
            Commands::Serve { port, public } => self.serve_controller.serve(port, public).await,
        }
    }
}
