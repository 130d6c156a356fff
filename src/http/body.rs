//! Response body module
//!
//! Every response shares one boxed body type so that empty status
//! responses and streamed files can flow through the same service.

use futures::stream;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, StreamBody};
use hyper::body::{Bytes, Frame};
use std::io;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Size of each chunk read from a file
pub const CHUNK_SIZE: usize = 64 * 1024;

pub type RespBody = UnsyncBoxBody<Bytes, io::Error>;

/// Body with no bytes
pub fn empty() -> RespBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Body yielding the file's bytes in `CHUNK_SIZE` frames until EOF
///
/// The file handle is owned by the stream and released when the stream
/// is exhausted, fails, or is dropped by the connection.
pub fn file_stream(file: File) -> RespBody {
    let frames = stream::try_unfold(file, |mut file| async move {
        let mut buf = vec![0u8; CHUNK_SIZE];
        let n = file.read(&mut buf).await?;
        if n == 0 {
            return Ok::<_, io::Error>(None);
        }
        buf.truncate(n);
        Ok(Some((Frame::data(Bytes::from(buf)), file)))
    });

    StreamBody::new(frames).boxed_unsync()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_body() {
        let bytes = empty().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_file_stream_spans_multiple_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.js");
        let content: Vec<u8> = (0..CHUNK_SIZE * 2 + 17).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &content).unwrap();

        let file = File::open(&path).await.unwrap();
        let bytes = file_stream(file).collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), content.as_slice());
    }

    #[tokio::test]
    async fn test_file_stream_of_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.css");
        std::fs::write(&path, b"").unwrap();

        let file = File::open(&path).await.unwrap();
        let bytes = file_stream(file).collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }
}
