use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(150);

/// Stderr spinner shown while a provider call is in flight. Stdout stays clean for reports.
pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task_handle.is_some()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(FRAME_INTERVAL);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        Self::finish_line("✅ ", final_message);
    }

    pub async fn warn(&mut self, warning_message: &str) {
        self.halt().await;
        Self::finish_line("⚠️ ", warning_message);
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        Self::finish_line("❌", error_message);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }

    fn finish_line(marker: &str, message: &str) {
        eprint!("\r\x1b[K{} {}\n", marker, message);
        let _ = std::io::stderr().flush();
    }
}

impl Drop for AnimatedLogger {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_and_stop_toggle_running_state() {
        let mut spinner = AnimatedLogger::new("Analyzing");
        assert!(!spinner.is_running());

        spinner.start();
        assert!(spinner.is_running());
        tokio::time::sleep(Duration::from_millis(20)).await;

        spinner.stop("done").await;
        assert!(!spinner.is_running());
    }

    #[tokio::test]
    async fn stopping_an_idle_spinner_is_harmless() {
        let mut spinner = AnimatedLogger::new("idle");
        spinner.error("nothing ran").await;
        assert!(!spinner.is_running());
    }
}
