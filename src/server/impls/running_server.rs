use log::info;
use crate::server::structs::running_server::RunningServer;

impl RunningServer {
    /// Drives the listener until it stops, then stops the coordinator.
    pub async fn run(self) -> std::io::Result<()> {
        let result = self.server.await;
        if let Some(coordinator) = self.coordinator {
            coordinator.abort();
        }
        info!("[BOOT] {} listener stopped", self.mode);
        result
    }
}
