use async_trait::async_trait;
use depgraph_nav::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock BrowserLauncher recording every URL it is asked to open
#[derive(Default, Clone)]
pub struct MockBrowserLauncher {
    pub opened: Arc<Mutex<Vec<String>>>,
    should_fail: bool,
}

impl MockBrowserLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            opened: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    pub fn get_opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrowserLauncher for MockBrowserLauncher {
    async fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.should_fail {
            anyhow::bail!("no browser available");
        }
        Ok(())
    }
}
