use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::RawOperationRecord;
use crate::domain::{AmountType, Operation};

/// Async stream of account operations from CSV script input
pub struct CsvOperationStream<A>
where
    A: AmountType + Unpin + 'static,
{
    inner: Pin<Box<dyn Stream<Item = Result<Operation<A>, IoError>> + Send>>,
}

impl<A> CsvOperationStream<A>
where
    A: AmountType + Unpin + 'static,
{
    /// Create a new operation stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawOperationRecord>()
            .map(|result| {
                result
                    .map_err(IoError::from)
                    .and_then(|raw| raw.parse::<A>())
            });

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Open a script file and stream its operations
    ///
    /// # Example
    /// ```rust,ignore
    /// let stream = CsvOperationStream::<f64>::from_file("script.csv").await?;
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl<A> Stream for CsvOperationStream<A>
where
    A: AmountType + Unpin + 'static,
{
    type Item = Result<Operation<A>, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
