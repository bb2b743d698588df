use crate::domain::{AdvertisementService, ScannerResult};
use crate::input::parse_record;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Counters for one scan run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Non-blank lines read
    pub lines: usize,
    /// Advertisements decoded and published
    pub decoded: usize,
    /// Well-formed advertisements that were not CJ Monitor frames
    pub ignored: usize,
    /// Lines that could not be parsed into an advertisement
    pub invalid: usize,
}

/// Read advertisement records line by line and process each one until the
/// input ends or `shutdown` is cancelled.
///
/// Malformed lines are logged and counted; a sink failure ends the scan.
pub async fn scan<R>(
    service: &AdvertisementService,
    mut reader: R,
    shutdown: CancellationToken,
) -> ScannerResult<ScanSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut summary = ScanSummary::default();

    loop {
        buf.clear();
        let read = tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!("scan cancelled");
                break;
            }
            read = reader.read_until(b'\n', &mut buf) => read?,
        };

        if read == 0 {
            debug!("end of input");
            break;
        }

        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        summary.lines += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!(line_number = summary.lines, error = %e, "skipping non-UTF-8 record");
                summary.invalid += 1;
                continue;
            }
        };

        let advertisement = match parse_record(line) {
            Ok(advertisement) => advertisement,
            Err(e) => {
                warn!(line_number = summary.lines, error = %e, "skipping malformed record");
                summary.invalid += 1;
                continue;
            }
        };

        if service.process(&advertisement).await? {
            summary.decoded += 1;
        } else {
            summary.ignored += 1;
        }
    }

    Ok(summary)
}
