//! Проверка доступности сервера моделей.
//!
//! Разовая проверка через `GET /version`, не heartbeat. Таймаут тот, что
//! у транспорта по умолчанию.

use crate::transport::ModelServer;
use contracts::shared::ollama::ServerStatus;

/// Никогда не возвращает ошибку: сбой пишется в лог и превращается в `connected = false`.
pub async fn check_server_status<S>(server: &S) -> ServerStatus
where
    S: ModelServer + ?Sized,
{
    match server.version().await {
        Ok(version) => {
            tracing::info!(base_url = server.base_url(), %version, "model server is reachable");
            ServerStatus::connected(version)
        }
        Err(e) => {
            tracing::warn!(
                base_url = server.base_url(),
                "model server is not reachable: {e}"
            );
            ServerStatus::disconnected()
        }
    }
}
