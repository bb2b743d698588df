use crate::domain::{ReadingSink, ScannerError, ScannerResult};
use async_trait::async_trait;
use cjmon_payload::DecodedAdvertisement;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Writes each decoded advertisement as one JSON object per line
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> ReadingSink for JsonLinesSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn publish(&self, decoded: &DecodedAdvertisement) -> ScannerResult<()> {
        let value = decoded
            .to_json()
            .map_err(|e| ScannerError::SinkError(format!("failed to serialize readings: {e}")))?;
        let mut line = value.to_string().into_bytes();
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(&line).await?;
        writer.flush().await?;
        Ok(())
    }
}
