use futures::{Stream, StreamExt};

use super::error::{ErrorPolicy, Flow, ReplayError};
use crate::domain::{AmountType, Operation};
use crate::engine::ScriptProcessor;
use crate::io::IoError;

/// Replays one stream of operations through a processor
pub struct ReplaySession<A, P>
where
    A: AmountType,
    P: ErrorPolicy,
{
    processor: ScriptProcessor<A>,
    error_policy: P,
}

impl<A, P> ReplaySession<A, P>
where
    A: AmountType,
    P: ErrorPolicy,
{
    /// Create a new replay session
    pub fn new(processor: ScriptProcessor<A>, error_policy: P) -> Self {
        Self {
            processor,
            error_policy,
        }
    }

    /// Process a stream of operations
    /// Returns true if the whole stream was consumed (errors skipped per policy)
    /// Returns false if processing was aborted by the error policy
    pub async fn process_stream<S>(&mut self, mut stream: S) -> bool
    where
        S: Stream<Item = Result<Operation<A>, IoError>> + Unpin,
    {
        while let Some(result) = stream.next().await {
            let outcome = match result {
                Ok(operation) => self
                    .processor
                    .process_operation(operation)
                    .map_err(ReplayError::from),
                Err(e) => Err(ReplayError::from(e)),
            };

            if let Err(e) = outcome
                && self.error_policy.on_error(e) == Flow::Abort
            {
                return false;
            }
        }

        true
    }

    /// Get a reference to the underlying processor
    pub fn processor(&self) -> &ScriptProcessor<A> {
        &self.processor
    }

    /// Consume the session and return the processor
    pub fn into_processor(self) -> ScriptProcessor<A> {
        self.processor
    }
}
