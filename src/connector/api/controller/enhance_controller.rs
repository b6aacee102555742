use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{EnhancerSession, Mode};

use super::super::Container;

pub struct EnhanceController<'a> {
    container: &'a Container,
}

impl<'a> EnhanceController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn enhance(&self, prompt: String, mode: Mode, save: bool) -> Result<String> {
        let mut session = EnhancerSession::new();
        if let Err(notice) = session.select_mode(mode) {
            bail!("{}", notice.message());
        }
        if let Err(notice) = session.set_prompt(prompt) {
            bail!("{}", notice.message());
        }

        let pending = match session.begin_enhance() {
            Ok(pending) => pending,
            Err(notice) => bail!("{}", notice.message()),
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid spinner template"),
        );
        spinner.set_message(format!("Enhancing {} prompt...", mode));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let use_case = self.container.enhance_use_case();
        let outcome = pending.run(&use_case).await;
        spinner.finish_and_clear();

        let notice = session.settle(outcome);
        if !notice.is_success() {
            bail!("{}", notice.message());
        }

        let mut output = session.enhanced_text().unwrap_or_default().to_string();

        if save {
            let notice = session.export(&self.container.export_use_case()).await;
            if !notice.is_success() {
                // The completion already succeeded; its text must survive a failed save.
                bail!(
                    "{}\n\nEnhanced prompt (not saved):\n{}",
                    notice.message(),
                    output
                );
            }
            if let Some(path) = session.last_export() {
                output.push_str(&format!("\n\nSaved to {}", path.display()));
            }
        }

        Ok(output)
    }
}
