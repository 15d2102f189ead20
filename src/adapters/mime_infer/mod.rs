// MIME sniffing adapter - Magic-number detection using the infer crate

use std::path::Path;
use std::sync::LazyLock;

use async_trait::async_trait;
use infer::Infer;
use tokio::io::AsyncReadExt;

use crate::domain::errors::*;
use crate::ports::*;

/// MIME reported when no signature matches
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Bytes read from the head of each file
const SNIFF_LEN: u64 = 8192;

/// MPEG transport stream packet sizes: plain TS, and M2TS with a 4-byte timecode
const TS_PACKET_LEN: usize = 188;
const M2TS_PACKET_LEN: usize = 192;
const TS_SYNC_BYTE: u8 = 0x47;

/// Packets that must line up before a buffer counts as a transport stream
const TS_MIN_PACKETS: usize = 3;

/// Built-in signatures plus the video containers `infer` does not know.
/// Custom matchers run first, so Ogg Theora wins over the generic `audio/ogg`.
static SNIFFER: LazyLock<Infer> = LazyLock::new(|| {
    let mut sniffer = Infer::new();
    sniffer.add("video/3gpp", "3gp", is_3gpp);
    sniffer.add("video/3gpp2", "3g2", is_3gpp2);
    sniffer.add("video/mp2t", "ts", is_mpeg_ts);
    sniffer.add("video/mp2t", "m2ts", is_m2ts);
    sniffer.add("video/ogg", "ogv", is_ogg_theora);
    sniffer
});

fn ftyp_brand(buf: &[u8]) -> Option<&[u8]> {
    (buf.get(4..8)? == b"ftyp").then(|| buf.get(8..12)).flatten()
}

fn is_3gpp(buf: &[u8]) -> bool {
    ftyp_brand(buf).is_some_and(|brand| brand.starts_with(b"3gp"))
}

fn is_3gpp2(buf: &[u8]) -> bool {
    ftyp_brand(buf).is_some_and(|brand| brand.starts_with(b"3g2"))
}

// Every packet start inside the buffer must carry the sync byte.
fn sync_bytes_align(buf: &[u8], first: usize, stride: usize) -> bool {
    let starts: Vec<usize> = (first..buf.len()).step_by(stride).collect();
    starts.len() >= TS_MIN_PACKETS && starts.iter().all(|&at| buf[at] == TS_SYNC_BYTE)
}

fn is_mpeg_ts(buf: &[u8]) -> bool {
    sync_bytes_align(buf, 0, TS_PACKET_LEN)
}

fn is_m2ts(buf: &[u8]) -> bool {
    sync_bytes_align(buf, 4, M2TS_PACKET_LEN)
}

// The first Ogg page holds the codec identification packet right after
// the 27-byte header and its segment table.
fn is_ogg_theora(buf: &[u8]) -> bool {
    if !buf.starts_with(b"OggS") {
        return false;
    }
    let Some(&segments) = buf.get(26) else {
        return false;
    };
    let packet = 27 + segments as usize;
    buf.get(packet..packet + 7) == Some(b"\x80theora".as_slice())
}

/// Content-sniffing classifier
#[derive(Debug, Default, Clone)]
pub struct InferMimeAdapter;

impl InferMimeAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Sniff a MIME type from an in-memory buffer
    pub fn sniff_bytes(buf: &[u8]) -> &'static str {
        SNIFFER
            .get(buf)
            .map(|kind| kind.mime_type())
            .unwrap_or(UNKNOWN_MIME)
    }
}

#[async_trait]
impl ClassifyPort for InferMimeAdapter {
    async fn sniff_mime(&self, file_path: &Path) -> Result<String, DomainError> {
        let file = tokio::fs::File::open(file_path).await.map_err(|e| {
            DomainError::FsFail(format!("Failed to open {}: {}", file_path.display(), e))
        })?;

        let mut head = Vec::with_capacity(SNIFF_LEN as usize);
        file.take(SNIFF_LEN)
            .read_to_end(&mut head)
            .await
            .map_err(|e| {
                DomainError::FsFail(format!("Failed to read {}: {}", file_path.display(), e))
            })?;

        let mime = Self::sniff_bytes(&head);
        tracing::debug!(path = %file_path.display(), mime, "Sniffed media type");
        Ok(mime.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MediaCategory;
    use tempfile::TempDir;

    const MP4_HEAD: &[u8] = b"\x00\x00\x00\x18ftypisom\x00\x00\x02\x00isomiso2mp41";
    const PNG_HEAD: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

    #[test]
    fn test_sniff_bytes() {
        assert_eq!(InferMimeAdapter::sniff_bytes(MP4_HEAD), "video/mp4");
        assert_eq!(InferMimeAdapter::sniff_bytes(PNG_HEAD), "image/png");
        assert_eq!(InferMimeAdapter::sniff_bytes(b"plain text"), UNKNOWN_MIME);
        assert_eq!(InferMimeAdapter::sniff_bytes(b""), UNKNOWN_MIME);
    }

    fn transport_stream(first: usize, stride: usize, packets: usize) -> Vec<u8> {
        let mut buf = vec![0u8; first + stride * packets];
        for at in (first..buf.len()).step_by(stride) {
            buf[at] = 0x47;
        }
        buf
    }

    fn ogg_page(packet: &[u8]) -> Vec<u8> {
        let mut page = b"OggS\x00\x02".to_vec();
        page.resize(26, 0);
        page.push(1);
        page.push(packet.len() as u8);
        page.extend_from_slice(packet);
        page
    }

    #[test]
    fn test_sniff_3gpp() {
        let head = b"\x00\x00\x00\x14ftyp3gp4\x00\x00\x02\x00isom3gp4";
        assert_eq!(InferMimeAdapter::sniff_bytes(head), "video/3gpp");
        let head = b"\x00\x00\x00\x14ftyp3g2a\x00\x00\x00\x00";
        assert_eq!(InferMimeAdapter::sniff_bytes(head), "video/3gpp2");
    }

    #[test]
    fn test_sniff_mpeg_ts() {
        let ts = transport_stream(0, 188, 4);
        assert_eq!(InferMimeAdapter::sniff_bytes(&ts), "video/mp2t");

        let mut broken = ts.clone();
        broken[188] = 0;
        assert_eq!(InferMimeAdapter::sniff_bytes(&broken), UNKNOWN_MIME);

        // A lone sync byte is not enough
        assert_eq!(InferMimeAdapter::sniff_bytes(b"G"), UNKNOWN_MIME);
    }

    #[test]
    fn test_sniff_m2ts() {
        let m2ts = transport_stream(4, 192, 4);
        assert_eq!(InferMimeAdapter::sniff_bytes(&m2ts), "video/mp2t");
    }

    #[test]
    fn test_sniff_ogg_theora() {
        let theora = ogg_page(b"\x80theora\x03\x02\x01");
        assert_eq!(InferMimeAdapter::sniff_bytes(&theora), "video/ogg");

        let vorbis = ogg_page(b"\x01vorbis\x00\x00\x00\x00");
        assert_eq!(InferMimeAdapter::sniff_bytes(&vorbis), "audio/ogg");
    }

    #[tokio::test]
    async fn test_classify_ignores_extension() {
        let dir = TempDir::new().unwrap();
        let disguised_video = dir.path().join("notes.txt");
        let disguised_image = dir.path().join("movie.mp4");
        std::fs::write(&disguised_video, MP4_HEAD).unwrap();
        std::fs::write(&disguised_image, PNG_HEAD).unwrap();

        let adapter = InferMimeAdapter::new();
        assert_eq!(
            adapter.classify(&disguised_video).await.unwrap(),
            MediaCategory::Video
        );
        assert_eq!(
            adapter.classify(&disguised_image).await.unwrap(),
            MediaCategory::Image
        );
    }

    #[tokio::test]
    async fn test_sniff_missing_file() {
        let dir = TempDir::new().unwrap();
        let adapter = InferMimeAdapter::new();
        let result = adapter.sniff_mime(&dir.path().join("missing")).await;
        assert!(matches!(result, Err(DomainError::FsFail(_))));
    }
}
