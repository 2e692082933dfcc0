use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::domain::Statement;

/// Write one statement line per source, then flush
pub async fn write_statements<'a, S, I, W>(sources: I, mut writer: W) -> Result<(), IoError>
where
    S: Statement + ?Sized + 'a,
    I: IntoIterator<Item = &'a S>,
    W: AsyncWrite + Unpin,
{
    for source in sources {
        let mut line = source.statement();
        line.push('\n');
        writer.write_all(line.as_bytes()).await?;
    }

    writer.flush().await?;
    Ok(())
}
